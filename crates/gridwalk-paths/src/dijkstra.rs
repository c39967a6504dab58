use std::hash::Hash;

use crate::path::{NodeMap, reconstruct_path};
use crate::pqueue::PriorityQueue;
use crate::traits::{Cost, WeightedPather};

/// Read-only snapshot handed to Dijkstra observers for each expanded node.
pub struct DijkstraView<'a, N> {
    /// The node just popped from the frontier.
    pub current: &'a N,
    pub queue: &'a PriorityQueue<N>,
    /// Best known distance from the start.
    pub dist: &'a NodeMap<N, Cost>,
    pub prev: &'a NodeMap<N, N>,
}

/// Observer callback for [`dijkstra_observed`].
pub type DijkstraObserver<'o, N> = dyn FnMut(&DijkstraView<'_, N>) + 'o;

/// Shortest path from `start` to the first node satisfying `is_goal`.
///
/// Returns the node sequence from `start` to the goal, both included, or
/// `None` if the frontier empties first. `start` itself may be the goal.
pub fn dijkstra<N, P>(pather: &P, start: N, is_goal: impl FnMut(&N) -> bool) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    P: WeightedPather<N> + ?Sized,
{
    dijkstra_observed(pather, start, is_goal, &mut [])
}

/// [`dijkstra`] with observers, each called once per expanded node before
/// the goal test and relaxation.
pub fn dijkstra_observed<N, P>(
    pather: &P,
    start: N,
    mut is_goal: impl FnMut(&N) -> bool,
    observers: &mut [&mut DijkstraObserver<'_, N>],
) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    P: WeightedPather<N> + ?Sized,
{
    let mut dist: NodeMap<N, Cost> = NodeMap::default();
    let mut prev: NodeMap<N, N> = NodeMap::default();
    let mut queue = PriorityQueue::new();
    dist.insert(start.clone(), 0);
    queue.insert(start.clone(), 0);

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    while !queue.is_empty() {
        let (current, priority) = queue.pop_with_priority();
        let base = dist[&current];
        // Superseded by a better entry for the same node.
        if priority > base {
            continue;
        }
        expanded += 1;
        log::trace!("dijkstra: expanding at distance {base}, {} queued", queue.len());

        let view = DijkstraView {
            current: &current,
            queue: &queue,
            dist: &dist,
            prev: &prev,
        };
        for observe in observers.iter_mut() {
            observe(&view);
        }

        if is_goal(&current) {
            let path = reconstruct_path(&start, current, &prev);
            log::debug!(
                "dijkstra: path of {} nodes, cost {base}, {expanded} expanded",
                path.len()
            );
            return Some(path);
        }

        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            let alt = base + pather.cost(&current, &next);
            if dist.get(&next).is_none_or(|&d| alt < d) {
                dist.insert(next.clone(), alt);
                prev.insert(next.clone(), current.clone());
                queue.insert(next, alt);
            }
        }
    }

    log::debug!("dijkstra: no path, {expanded} expanded");
    None
}
