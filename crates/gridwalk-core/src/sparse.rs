//! [`SparseWorld`]: a map from coordinate to cell.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::ControlFlow;

use crate::geom::{Coord, Rect};
use crate::world::{self, World};

/// Map-backed cell storage. Only non-empty cells are stored: writing the
/// empty cell removes the entry, and absent keys read as undefined.
///
/// Iteration is row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseWorld<C = char> {
    cells: BTreeMap<Coord, C>,
}

impl<C: Copy + Eq + Default + 'static> SparseWorld<C> {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// `(coordinate, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, C)> + '_ {
        self.cells.iter().map(|(&at, &cell)| (at, cell))
    }
}

impl<C: Copy + Eq + Default + 'static> World for SparseWorld<C> {
    type Cell = C;

    fn get(&self, at: Coord) -> Option<C> {
        self.cells.get(&at).copied()
    }

    fn set(&mut self, at: Coord, cell: C) {
        if cell == C::default() {
            self.cells.remove(&at);
        } else {
            self.cells.insert(at, cell);
        }
    }

    fn contains(&self, at: Coord) -> bool {
        self.cells.contains_key(&at)
    }

    fn each(&self, visit: &mut dyn FnMut(Coord) -> ControlFlow<()>) {
        for &at in self.cells.keys() {
            if visit(at).is_break() {
                return;
            }
        }
    }

    fn find(&self, cell: C) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|&(_, &c)| c == cell)
            .map(|(&at, _)| at)
            .collect()
    }

    fn rect(&self) -> Option<Rect> {
        Rect::bounding(self.cells.keys().copied())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn copy(&self) -> Box<dyn World<Cell = C>> {
        Box::new(self.clone())
    }
}

impl<C: Copy + Eq + Default + 'static> FromIterator<(Coord, C)> for SparseWorld<C> {
    fn from_iter<I: IntoIterator<Item = (Coord, C)>>(iter: I) -> Self {
        let mut w = Self::new();
        for (at, cell) in iter {
            w.set(at, cell);
        }
        w
    }
}

impl SparseWorld<char> {
    /// Build from text lines, one cell per character.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut w = Self::new();
        world::fill_from_lines(&mut w, lines);
        w
    }
}

impl fmt::Display for SparseWorld<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&world::render(self))
    }
}
