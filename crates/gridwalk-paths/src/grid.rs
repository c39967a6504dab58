//! A* bound to a [`World`].

use gridwalk_core::{Connectivity, Coord, World};

use crate::astar::astar;
use crate::traits::{AstarPather, Cost, Pather, WeightedPather};

/// Pather over the defined cells of a world. Neighbors are the 4- or
/// 8-connected coordinates that the world [`contains`](World::contains).
pub struct GridPather<'w, W: ?Sized, C, H> {
    world: &'w W,
    connectivity: Connectivity,
    cost: C,
    heuristic: H,
}

impl<'w, W, C, H> GridPather<'w, W, C, H>
where
    W: World + ?Sized,
    C: Fn(Coord, Coord) -> Cost,
    H: Fn(Coord) -> Cost,
{
    pub fn new(world: &'w W, connectivity: Connectivity, cost: C, heuristic: H) -> Self {
        Self {
            world,
            connectivity,
            cost,
            heuristic,
        }
    }

    pub fn world(&self) -> &'w W {
        self.world
    }
}

impl<W, C, H> Pather<Coord> for GridPather<'_, W, C, H>
where
    W: World + ?Sized,
{
    fn neighbors(&self, node: &Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            node.neighbors(self.connectivity)
                .into_iter()
                .filter(|n| self.world.contains(*n)),
        );
    }
}

impl<W, C, H> WeightedPather<Coord> for GridPather<'_, W, C, H>
where
    W: World + ?Sized,
    C: Fn(Coord, Coord) -> Cost,
{
    fn cost(&self, from: &Coord, to: &Coord) -> Cost {
        (self.cost)(*from, *to)
    }
}

impl<W, C, H> AstarPather<Coord> for GridPather<'_, W, C, H>
where
    W: World + ?Sized,
    C: Fn(Coord, Coord) -> Cost,
    H: Fn(Coord) -> Cost,
{
    fn estimate(&self, node: &Coord) -> Cost {
        (self.heuristic)(*node)
    }
}

/// A* over the defined cells of `world`.
pub fn astar_grid<W>(
    world: &W,
    start: Coord,
    is_goal: impl FnMut(&Coord) -> bool,
    connectivity: Connectivity,
    cost: impl Fn(Coord, Coord) -> Cost,
    heuristic: impl Fn(Coord) -> Cost,
) -> Option<Vec<Coord>>
where
    W: World + ?Sized,
{
    astar(
        &GridPather::new(world, connectivity, cost, heuristic),
        start,
        is_goal,
    )
}
