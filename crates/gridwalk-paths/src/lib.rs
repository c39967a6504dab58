//! Shortest-path search over arbitrary node types.
//!
//! - **Dijkstra** ([`dijkstra`]), backed by the linked-list
//!   [`PriorityQueue`].
//! - **A\*** ([`astar`]) with an explicit open set, plus a grid
//!   specialization ([`astar_grid`]) over a `gridwalk_core::World`.
//!
//! Nodes are any `Clone + Eq + Hash` value. Goals are expressed as a
//! predicate, so a single node, a set of nodes, or any other condition all
//! look the same to the search. Both searches return `None` when no goal is
//! reachable.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`FnPather`] implements all three from closures.

mod astar;
mod dijkstra;
mod distance;
mod grid;
mod path;
mod pqueue;
mod traits;

pub use astar::{AstarObserver, AstarView, OpenSet, astar, astar_observed};
pub use dijkstra::{DijkstraObserver, DijkstraView, dijkstra, dijkstra_observed};
pub use distance::{chebyshev, manhattan};
pub use grid::{GridPather, astar_grid};
pub use path::{NodeMap, reconstruct_path};
pub use pqueue::{Iter, PriorityQueue};
pub use traits::{AstarPather, Cost, FnPather, Pather, WeightedPather};
