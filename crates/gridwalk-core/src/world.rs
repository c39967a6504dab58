//! The [`World`] capability: a field of single-value cells over coordinates.
//!
//! Two storage strategies implement it, picked by the caller according to
//! how dense the content is expected to be:
//!
//! - [`DenseWorld`]: auto-growing array of (possibly ragged) rows.
//! - [`SparseWorld`]: ordered map from coordinate to cell.
//!
//! `get` distinguishes two kinds of absence. `None` is "undefined": nothing is
//! recorded there and nothing can be. `Some(C::default())` is the empty cell.
//! A dense world answers `Some(empty)` for any non-negative coordinate it has
//! not stored, because growth only happens on write; a sparse world never
//! stores empty cells, so it answers `None`.

use std::fmt::Write as _;
use std::ops::ControlFlow;

use crate::dense::DenseWorld;
use crate::geom::{Coord, Rect};
use crate::sparse::SparseWorld;

/// Read/write/iterate access to a 2D cell field.
///
/// `Cell::default()` is the empty cell.
pub trait World {
    type Cell: Copy + Eq + Default + 'static;

    /// The cell at `at`, or `None` if `at` is undefined.
    fn get(&self, at: Coord) -> Option<Self::Cell>;

    /// Record `cell` at `at`.
    fn set(&mut self, at: Coord, cell: Self::Cell);

    /// Whether `at` is currently defined (has storage behind it).
    fn contains(&self, at: Coord) -> bool;

    /// Visit every defined coordinate until `visit` breaks.
    fn each(&self, visit: &mut dyn FnMut(Coord) -> ControlFlow<()>);

    /// Every coordinate currently holding exactly `cell`, row-major.
    fn find(&self, cell: Self::Cell) -> Vec<Coord>;

    /// Inclusive bounding box of the defined coordinates.
    fn rect(&self) -> Option<Rect>;

    /// Number of defined coordinates.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An independent deep copy.
    fn copy(&self) -> Box<dyn World<Cell = Self::Cell>>;
}

/// Storage strategy for [`load`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backing {
    #[default]
    Dense,
    Sparse,
}

/// Build a world from text, one cell per character at (column, row). Rows
/// may have different lengths.
pub fn load<S: AsRef<str>>(lines: &[S], backing: Backing) -> Box<dyn World<Cell = char>> {
    log::debug!("loading {:?} world from {} lines", backing, lines.len());
    let mut w: Box<dyn World<Cell = char>> = match backing {
        Backing::Dense => Box::new(DenseWorld::new()),
        Backing::Sparse => Box::new(SparseWorld::new()),
    };
    fill_from_lines(w.as_mut(), lines);
    w
}

pub(crate) fn fill_from_lines<W, S>(w: &mut W, lines: &[S])
where
    W: World<Cell = char> + ?Sized,
    S: AsRef<str>,
{
    for (y, row) in lines.iter().enumerate() {
        for (x, ch) in row.as_ref().chars().enumerate() {
            w.set(Coord::new(x as i32, y as i32), ch);
        }
    }
}

/// Render a character world over its bounding box. Empty and undefined cells
/// are drawn as spaces.
pub fn render<W: World<Cell = char> + ?Sized>(w: &W) -> String {
    let Some(r) = w.rect() else {
        return String::new();
    };
    let mut out = String::with_capacity((r.width() as usize + 1) * r.height() as usize);
    for y in r.min.y..=r.max.y {
        if y > r.min.y {
            out.push('\n');
        }
        for x in r.min.x..=r.max.x {
            match w.get(Coord::new(x, y)) {
                Some(ch) if ch != char::default() => out.push(ch),
                _ => out.push(' '),
            }
        }
    }
    out
}

/// Debug dump of every defined cell, one per line.
pub fn dump<W: World + ?Sized>(w: &W) -> String
where
    W::Cell: std::fmt::Debug,
{
    let mut out = String::new();
    w.each(&mut |at| {
        if let Some(cell) = w.get(at) {
            let _ = writeln!(out, "{at} {cell:?}");
        }
        ControlFlow::Continue(())
    });
    out
}
