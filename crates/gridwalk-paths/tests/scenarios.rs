use gridwalk_core::{Backing, Connectivity, Coord, DenseWorld, SparseWorld, World, c, load};
use gridwalk_paths::{Cost, FnPather, GridPather, astar, astar_grid, dijkstra, manhattan};
use proptest::prelude::*;

/// 4-connected neighbors that are defined and not walls.
fn open_neighbors<W: World<Cell = char> + ?Sized>(world: &W, p: Coord) -> Vec<Coord> {
    p.neighbors_4()
        .into_iter()
        .filter(|n| world.contains(*n) && world.get(*n) != Some('#'))
        .collect()
}

/// Walk a path and check every step is a unit 4-connected move.
fn assert_connected(path: &[Coord]) {
    for pair in path.windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1, "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn scenario_a_dijkstra_around_a_wall() {
    for backing in [Backing::Dense, Backing::Sparse] {
        let world = load(&["S..", ".#.", "..E"], backing);
        let start = world.find('S')[0];
        let goal = world.find('E')[0];
        let pather = FnPather::new(
            |p: &Coord| open_neighbors(world.as_ref(), *p),
            |_: &Coord, _: &Coord| 1,
        );
        let path = dijkstra(&pather, start, |p| *p == goal).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert!(!path.contains(&c(1, 1)));
        assert_connected(&path);
    }
}

#[test]
fn scenario_b_astar_agrees_with_dijkstra() {
    let rows = vec!["........"; 8];
    let world = DenseWorld::from_lines(&rows);
    let goal = c(7, 7);

    let pather = FnPather::new(
        |p: &Coord| open_neighbors(&world, *p),
        |_: &Coord, _: &Coord| 1,
    )
    .with_heuristic(move |p: &Coord| manhattan(*p, goal));

    let a = astar(&pather, c(0, 0), |p| *p == goal).unwrap();
    let d = dijkstra(&pather, c(0, 0), |p| *p == goal).unwrap();
    assert_eq!(a.len(), 15);
    assert_eq!(d.len(), a.len());
    assert_connected(&a);
    assert_connected(&d);

    let grid = astar_grid(
        &world,
        c(0, 0),
        |p| *p == goal,
        Connectivity::Four,
        |_, _| 1,
        |p| manhattan(p, goal),
    )
    .unwrap();
    assert_eq!(grid.len(), 15);
}

const HILL: [&str; 5] = [
    "Sabqponm",
    "abcryxxl",
    "accszExk",
    "acctuvwj",
    "abdefghi",
];

fn elevation(ch: char) -> u32 {
    match ch {
        'S' => 'a' as u32,
        'E' => 'z' as u32,
        other => other as u32,
    }
}

#[test]
fn scenario_c_hill_climb() {
    let world = load(&HILL, Backing::Dense);
    let start = world.find('S')[0];
    let goal = world.find('E')[0];

    let pather = FnPather::new(
        |p: &Coord| {
            let Some(here) = world.get(*p).map(elevation) else {
                return Vec::new();
            };
            p.neighbors_4()
                .into_iter()
                .filter(|n| world.contains(*n))
                .filter(|n| world.get(*n).map(elevation).is_some_and(|h| h <= here + 1))
                .collect()
        },
        |_: &Coord, _: &Coord| 1,
    )
    .with_heuristic(move |p: &Coord| manhattan(*p, goal));

    let path = astar(&pather, start, |p| *p == goal).unwrap();
    assert_eq!(path.len() - 1, 31);
    assert_connected(&path);

    let d = dijkstra(&pather, start, |p| *p == goal).unwrap();
    assert_eq!(d.len() - 1, 31);
}

#[test]
fn scenario_c_reverse_search_to_any_lowland() {
    // Downhill from E to the nearest 'a' (or S): a goal set via predicate.
    let world = load(&HILL, Backing::Sparse);
    let goal = world.find('E')[0];
    let pather = FnPather::new(
        |p: &Coord| {
            let Some(here) = world.get(*p).map(elevation) else {
                return Vec::new();
            };
            p.neighbors_4()
                .into_iter()
                .filter(|n| world.get(*n).map(elevation).is_some_and(|h| h + 1 >= here))
                .collect()
        },
        |_: &Coord, _: &Coord| 1,
    );
    let path = dijkstra(&pather, goal, |p| {
        world.get(*p).map(elevation) == Some('a' as u32)
    })
    .unwrap();
    assert_eq!(path.len() - 1, 29);
}

#[test]
fn scenario_d_disconnected_components() {
    let world = load(&["..#..", "..#..", "..#.."], Backing::Dense);
    let start = c(0, 1);
    let goal = c(4, 1);

    let pather = FnPather::new(
        |p: &Coord| open_neighbors(world.as_ref(), *p),
        |_: &Coord, _: &Coord| 1,
    )
    .with_heuristic(move |p: &Coord| manhattan(*p, goal));

    assert_eq!(dijkstra(&pather, start, |p| *p == goal), None);
    assert_eq!(astar(&pather, start, |p| *p == goal), None);

    // The grid pather only filters undefined cells, so walls need removing.
    let mut holes = world.copy();
    for wall in holes.find('#') {
        holes.set(wall, '\0');
    }
    let grid = GridPather::new(holes.as_ref(), Connectivity::Eight, |_, _| 1, |_| 0);
    assert!(astar(&grid, start, |p| *p == goal).is_some());
}

#[test]
fn scenario_d_sparse_islands() {
    let islands: SparseWorld<char> =
        [(c(0, 0), 'a'), (c(1, 0), 'b'), (c(3, 2), 'c'), (c(4, 2), 'd')]
            .into_iter()
            .collect();
    let found = astar_grid(
        &islands,
        c(0, 0),
        |p| *p == c(4, 2),
        Connectivity::Eight,
        |_, _| 1,
        |_| 0,
    );
    assert_eq!(found, None);

    let grid = GridPather::new(&islands, Connectivity::Eight, |_, _| 1, |_| 0);
    assert_eq!(dijkstra(&grid, c(0, 0), |p| *p == c(4, 2)), None);
    assert_eq!(dijkstra(&grid, c(3, 2), |p| *p == c(4, 2)).map(|p| p.len()), Some(2));
}

fn random_grid() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(prop::bool::weighted(0.25), 6..7).prop_map(|row| {
            row.into_iter()
                .map(|wall| if wall { '#' } else { '.' })
                .collect::<String>()
        }),
        6..7,
    )
}

proptest! {
    #[test]
    fn astar_and_dijkstra_agree_on_cost(rows in random_grid()) {
        let mut world = DenseWorld::from_lines(&rows);
        let start = c(0, 0);
        let goal = c(5, 5);
        world.set(start, '.');
        world.set(goal, '.');

        let pather = FnPather::new(
            |p: &Coord| open_neighbors(&world, *p),
            |_: &Coord, _: &Coord| 1 as Cost,
        )
        .with_heuristic(move |p: &Coord| manhattan(*p, goal));

        let a = astar(&pather, start, |p| *p == goal);
        let d = dijkstra(&pather, start, |p| *p == goal);
        prop_assert_eq!(a.as_ref().map(Vec::len), d.as_ref().map(Vec::len));
        if let Some(path) = a {
            prop_assert_eq!(path[0], start);
            prop_assert_eq!(path[path.len() - 1], goal);
            assert_connected(&path);
        }
    }
}
