/// Edge cost and score type used by every search.
pub type Cost = i64;

/// Minimal search interface: neighbor enumeration over nodes of type `N`.
pub trait Pather<N> {
    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling. The neighbor set must be finite.
    fn neighbors(&self, node: &N, buf: &mut Vec<N>);
}

/// Pather with weighted edges.
pub trait WeightedPather<N>: Pather<N> {
    /// Cost of moving from `from` to adjacent `to`. Must be ≥ 0; negative
    /// costs are not detected and give meaningless results.
    fn cost(&self, from: &N, to: &N) -> Cost;
}

/// Weighted pather with a heuristic for A*.
pub trait AstarPather<N>: WeightedPather<N> {
    /// Estimated remaining cost from `node` to the goal. Must never
    /// overestimate (admissible) for A* to return a shortest path.
    fn estimate(&self, node: &N) -> Cost;
}

/// Adapts plain closures to the pather traits.
///
/// ```
/// use gridwalk_core::{Coord, c};
/// use gridwalk_paths::{FnPather, dijkstra};
///
/// let line = FnPather::new(
///     |p: &Coord| vec![p.east()],
///     |_: &Coord, _: &Coord| 1,
/// );
/// let path = dijkstra(&line, c(0, 0), |p| *p == c(3, 0)).unwrap();
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Clone, Copy)]
pub struct FnPather<F, C, H = ()> {
    neighbors: F,
    cost: C,
    heuristic: H,
}

impl<F, C> FnPather<F, C> {
    pub fn new<N>(neighbors: F, cost: C) -> Self
    where
        F: Fn(&N) -> Vec<N>,
        C: Fn(&N, &N) -> Cost,
    {
        Self {
            neighbors,
            cost,
            heuristic: (),
        }
    }
}

impl<F, C, H> FnPather<F, C, H> {
    /// Attach a heuristic, making the pather usable with A*.
    pub fn with_heuristic<N, H2>(self, heuristic: H2) -> FnPather<F, C, H2>
    where
        H2: Fn(&N) -> Cost,
    {
        FnPather {
            neighbors: self.neighbors,
            cost: self.cost,
            heuristic,
        }
    }
}

impl<N, F, C, H> Pather<N> for FnPather<F, C, H>
where
    F: Fn(&N) -> Vec<N>,
{
    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend((self.neighbors)(node));
    }
}

impl<N, F, C, H> WeightedPather<N> for FnPather<F, C, H>
where
    F: Fn(&N) -> Vec<N>,
    C: Fn(&N, &N) -> Cost,
{
    fn cost(&self, from: &N, to: &N) -> Cost {
        (self.cost)(from, to)
    }
}

impl<N, F, C, H> AstarPather<N> for FnPather<F, C, H>
where
    F: Fn(&N) -> Vec<N>,
    C: Fn(&N, &N) -> Cost,
    H: Fn(&N) -> Cost,
{
    fn estimate(&self, node: &N) -> Cost {
        (self.heuristic)(node)
    }
}
