//! **gridwalk-core** — 2D coordinates and cell worlds.
//!
//! This crate provides the value types the search algorithms in
//! `gridwalk-paths` operate over: integer coordinates, compass directions,
//! and the [`World`] cell field with its dense and sparse storage strategies.

pub mod dense;
pub mod direction;
pub mod geom;
pub mod sparse;
pub mod world;

pub use dense::DenseWorld;
pub use direction::{Direction, ParseDirectionError, Turn};
pub use geom::{Connectivity, Coord, ParseCoordError, Rect, c};
pub use sparse::SparseWorld;
pub use world::{Backing, World, load, render};
