//! [`DenseWorld`]: an auto-growing array of rows.

use std::fmt;
use std::ops::ControlFlow;

use crate::geom::{Coord, Rect};
use crate::world::{self, World};

/// Row-major cell storage. Rows grow independently, so the stored extent may
/// be ragged.
///
/// Reads at negative coordinates are undefined (`None`); reads at
/// non-negative coordinates outside the stored extent yield the empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseWorld<C = char> {
    rows: Vec<Vec<C>>,
}

impl<C: Copy + Eq + Default + 'static> DenseWorld<C> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    #[inline]
    fn index(at: Coord) -> Option<(usize, usize)> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        Some((x, y))
    }

    /// Number of stored rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The stored cells of row `y`, if any.
    pub fn row(&self, y: usize) -> Option<&[C]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Trim to the bounding box of non-empty cells, re-based at the origin.
    pub fn crop(&self) -> Self {
        let empty = C::default();
        let occupied = self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, cell)| *cell != empty)
                .map(move |(x, _)| Coord::new(x as i32, y as i32))
        });
        let mut ret = Self::new();
        let Some(r) = Rect::bounding(occupied) else {
            return ret;
        };
        for at in r.iter() {
            if self.contains(at) {
                if let Some(cell) = self.get(at) {
                    ret.set(at - r.min, cell);
                }
            }
        }
        ret
    }
}

impl<C: Copy + Eq + Default + 'static> World for DenseWorld<C> {
    type Cell = C;

    fn get(&self, at: Coord) -> Option<C> {
        let (x, y) = Self::index(at)?;
        Some(
            self.rows
                .get(y)
                .and_then(|row| row.get(x))
                .copied()
                .unwrap_or_default(),
        )
    }

    /// Grows rows (and the target row) as needed, filling with empty cells.
    ///
    /// # Panics
    ///
    /// Panics if `at` has a negative component.
    fn set(&mut self, at: Coord, cell: C) {
        let Some((x, y)) = Self::index(at) else {
            panic!("dense world cannot store negative coordinate {at}");
        };
        if self.rows.len() <= y {
            self.rows.resize_with(y + 1, Vec::new);
        }
        let row = &mut self.rows[y];
        if row.len() <= x {
            row.resize(x + 1, C::default());
        }
        row[x] = cell;
    }

    fn contains(&self, at: Coord) -> bool {
        Self::index(at).is_some_and(|(x, y)| self.rows.get(y).is_some_and(|row| x < row.len()))
    }

    fn each(&self, visit: &mut dyn FnMut(Coord) -> ControlFlow<()>) {
        for (y, row) in self.rows.iter().enumerate() {
            for x in 0..row.len() {
                if visit(Coord::new(x as i32, y as i32)).is_break() {
                    return;
                }
            }
        }
    }

    fn find(&self, cell: C) -> Vec<Coord> {
        let mut ret = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == cell {
                    ret.push(Coord::new(x as i32, y as i32));
                }
            }
        }
        ret
    }

    fn rect(&self) -> Option<Rect> {
        let width = self.rows.iter().map(Vec::len).max()?;
        if width == 0 {
            return None;
        }
        Some(Rect::new(
            Coord::ZERO,
            Coord::new(width as i32 - 1, self.rows.len() as i32 - 1),
        ))
    }

    fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    fn copy(&self) -> Box<dyn World<Cell = C>> {
        Box::new(self.clone())
    }
}

impl DenseWorld<char> {
    /// Build from text lines, one cell per character.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut w = Self::new();
        world::fill_from_lines(&mut w, lines);
        w
    }
}

impl fmt::Display for DenseWorld<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&world::render(self))
    }
}
