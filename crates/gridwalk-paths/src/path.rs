use std::collections::HashMap;
use std::hash::Hash;

/// Hash map keyed by search nodes.
pub type NodeMap<N, V> = HashMap<N, V, ahash::RandomState>;

/// Walk the predecessor chain back from `goal` to `start` and return the
/// path in start-to-goal order, both ends included.
///
/// # Panics
///
/// Panics if the chain does not lead back to `start`: a node other than
/// `start` without a predecessor, or a cycle. Either means the search that
/// built `prev` was wired up wrong.
pub fn reconstruct_path<N: Clone + Eq + Hash>(start: &N, goal: N, prev: &NodeMap<N, N>) -> Vec<N> {
    let mut path = vec![goal];
    loop {
        let cursor = &path[path.len() - 1];
        if cursor == start {
            break;
        }
        let Some(p) = prev.get(cursor) else {
            panic!("broken predecessor chain: node without predecessor is not the start");
        };
        assert!(path.len() <= prev.len(), "cycle in predecessor chain");
        path.push(p.clone());
    }
    path.reverse();
    path
}
