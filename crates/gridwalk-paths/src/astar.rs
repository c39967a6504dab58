use std::hash::Hash;

use indexmap::IndexSet;

use crate::path::{NodeMap, reconstruct_path};
use crate::traits::{AstarPather, Cost};

/// Open set in admission order.
pub type OpenSet<N> = IndexSet<N, ahash::RandomState>;

/// Read-only snapshot handed to A* observers on every iteration.
pub struct AstarView<'a, N> {
    /// The open-set member about to be selected.
    pub current: &'a N,
    pub open: &'a OpenSet<N>,
    pub came_from: &'a NodeMap<N, N>,
    /// Best known cost from the start.
    pub g_score: &'a NodeMap<N, Cost>,
    /// `g_score` plus the heuristic.
    pub f_score: &'a NodeMap<N, Cost>,
}

/// Observer callback for [`astar_observed`].
pub type AstarObserver<'o, N> = dyn FnMut(&AstarView<'_, N>) + 'o;

/// Heuristic-guided shortest path from `start` to the first selected node
/// satisfying `is_goal`.
///
/// Returns the node sequence from `start` to the goal, both included, or
/// `None` if the open set empties without reaching a goal. The result is a
/// shortest path when the pather's heuristic is admissible.
///
/// Each iteration selects the open node with the lowest f-score by linear
/// scan. Among equal f-scores the node admitted to the open set earliest wins.
pub fn astar<N, P>(pather: &P, start: N, is_goal: impl FnMut(&N) -> bool) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    P: AstarPather<N> + ?Sized,
{
    astar_observed(pather, start, is_goal, &mut [])
}

/// [`astar`] with observers, each called once per iteration just before the
/// selected node is goal-tested and expanded.
pub fn astar_observed<N, P>(
    pather: &P,
    start: N,
    mut is_goal: impl FnMut(&N) -> bool,
    observers: &mut [&mut AstarObserver<'_, N>],
) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    P: AstarPather<N> + ?Sized,
{
    let mut open: OpenSet<N> = OpenSet::default();
    let mut came_from: NodeMap<N, N> = NodeMap::default();
    let mut g_score: NodeMap<N, Cost> = NodeMap::default();
    let mut f_score: NodeMap<N, Cost> = NodeMap::default();

    g_score.insert(start.clone(), 0);
    f_score.insert(start.clone(), pather.estimate(&start));
    open.insert(start.clone());

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    let goal = 'search: loop {
        let Some(idx) = lowest_f(&open, &f_score) else {
            break 'search None;
        };
        let current = open[idx].clone();

        let view = AstarView {
            current: &current,
            open: &open,
            came_from: &came_from,
            g_score: &g_score,
            f_score: &f_score,
        };
        for observe in observers.iter_mut() {
            observe(&view);
        }

        if is_goal(&current) {
            break 'search Some(current);
        }

        open.shift_remove_index(idx);
        expanded += 1;
        log::trace!("astar: expanding, {} open", open.len());

        let current_g = g_score[&current];
        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            let tentative = current_g + pather.cost(&current, &next);
            if g_score.get(&next).is_none_or(|&g| tentative < g) {
                came_from.insert(next.clone(), current.clone());
                g_score.insert(next.clone(), tentative);
                f_score.insert(next.clone(), tentative + pather.estimate(&next));
                open.insert(next);
            }
        }
    };

    let Some(goal) = goal else {
        log::debug!("astar: no path, {expanded} expanded");
        return None;
    };
    let path = reconstruct_path(&start, goal, &came_from);
    log::debug!(
        "astar: path of {} nodes, {expanded} expanded",
        path.len()
    );
    Some(path)
}

/// Index of the open node with the lowest f-score; the earliest wins ties.
fn lowest_f<N: Eq + Hash>(open: &OpenSet<N>, f_score: &NodeMap<N, Cost>) -> Option<usize> {
    let mut best: Option<(usize, Cost)> = None;
    for (i, node) in open.iter().enumerate() {
        let f = f_score.get(node).copied().unwrap_or(Cost::MAX);
        if best.is_none_or(|(_, b)| f < b) {
            best = Some((i, f));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FnPather;
    use gridwalk_core::{Coord, c};

    fn open_grid(w: i32, h: i32) -> impl Fn(&Coord) -> Vec<Coord> {
        move |p: &Coord| {
            p.neighbors_4()
                .into_iter()
                .filter(|n| n.x >= 0 && n.y >= 0 && n.x < w && n.y < h)
                .collect()
        }
    }

    #[test]
    fn straight_line_with_exact_heuristic() {
        let goal = c(5, 0);
        let pather = FnPather::new(open_grid(6, 1), |_: &Coord, _: &Coord| 1)
            .with_heuristic(move |p: &Coord| Cost::from(p.manhattan(goal)));
        let path = astar(&pather, c(0, 0), |p| *p == goal).unwrap();
        assert_eq!(path, (0..6).map(|x| c(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn start_is_goal() {
        let pather = FnPather::new(open_grid(3, 3), |_: &Coord, _: &Coord| 1)
            .with_heuristic(|_: &Coord| 0);
        assert_eq!(astar(&pather, c(1, 1), |p| *p == c(1, 1)), Some(vec![c(1, 1)]));
    }

    #[test]
    fn unreachable_goal_is_none() {
        let pather = FnPather::new(open_grid(3, 3), |_: &Coord, _: &Coord| 1)
            .with_heuristic(|_: &Coord| 0);
        assert_eq!(astar(&pather, c(0, 0), |p| *p == c(9, 9)), None);
    }

    #[test]
    fn prefers_cheaper_detour() {
        // Stepping onto row 0 costs 10; going around through row 1 is cheaper.
        let goal = c(2, 0);
        let pather = FnPather::new(open_grid(3, 2), |_: &Coord, to: &Coord| {
            if to.y == 0 && to.x == 1 { 10 } else { 1 }
        })
        .with_heuristic(move |p: &Coord| Cost::from(p.manhattan(goal)));
        let path = astar(&pather, c(0, 0), |p| *p == goal).unwrap();
        assert_eq!(path, vec![c(0, 0), c(0, 1), c(1, 1), c(2, 1), c(2, 0)]);
    }

    #[test]
    fn ties_go_to_earliest_admitted() {
        let pather = FnPather::new(open_grid(3, 3), |_: &Coord, _: &Coord| 1)
            .with_heuristic(|_: &Coord| 0);
        let mut order = Vec::new();
        let mut record = |v: &AstarView<'_, Coord>| order.push(*v.current);
        astar_observed(&pather, c(1, 1), |p| *p == c(1, 0), &mut [&mut record]);
        // Neighbors are admitted N, E, S, W; the north one is selected first.
        assert_eq!(order, vec![c(1, 1), c(1, 0)]);
    }

    #[test]
    fn observers_see_scores() {
        let goal = c(2, 0);
        let pather = FnPather::new(open_grid(3, 1), |_: &Coord, _: &Coord| 2)
            .with_heuristic(move |p: &Coord| Cost::from(p.manhattan(goal)));
        let mut f_seen = Vec::new();
        let mut record = |v: &AstarView<'_, Coord>| {
            assert!(v.open.contains(v.current));
            f_seen.push(v.f_score[v.current]);
        };
        astar_observed(&pather, c(0, 0), |p| *p == goal, &mut [&mut record]);
        assert_eq!(f_seen, vec![2, 3, 4]);
    }
}
