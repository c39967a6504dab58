//! Geometry primitives: [`Coord`], [`Rect`] and [`Connectivity`].
//!
//! X grows right, Y grows down, so "north" is `y - 1`.

use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::direction::{Direction, ParseDirectionError};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D integer coordinate. Plain value type: every operation returns a new
/// `Coord`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Shorthand constructor, `c(x, y)`.
#[inline]
pub const fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[inline]
    pub const fn plus(self, other: Coord) -> Self {
        self.shift(other.x, other.y)
    }

    #[inline]
    pub const fn minus(self, other: Coord) -> Self {
        self.shift(-other.x, -other.y)
    }

    #[inline]
    pub const fn north(self) -> Self {
        self.shift(0, -1)
    }
    #[inline]
    pub const fn north_east(self) -> Self {
        self.shift(1, -1)
    }
    #[inline]
    pub const fn east(self) -> Self {
        self.shift(1, 0)
    }
    #[inline]
    pub const fn south_east(self) -> Self {
        self.shift(1, 1)
    }
    #[inline]
    pub const fn south(self) -> Self {
        self.shift(0, 1)
    }
    #[inline]
    pub const fn south_west(self) -> Self {
        self.shift(-1, 1)
    }
    #[inline]
    pub const fn west(self) -> Self {
        self.shift(-1, 0)
    }
    #[inline]
    pub const fn north_west(self) -> Self {
        self.shift(-1, -1)
    }

    /// One step in direction `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    /// Walk a sequence of direction abbreviations (`"n"`, `"se"`, ...),
    /// stopping at the first one that does not parse.
    pub fn execute<S: AsRef<str>>(self, steps: &[S]) -> Result<Self, ParseDirectionError> {
        steps
            .iter()
            .try_fold(self, |at, s| Ok(at.step(s.as_ref().parse()?)))
    }

    /// The four cardinal neighbours in compass order (N, E, S, W).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [self.north(), self.east(), self.south(), self.west()]
    }

    /// All eight neighbours in compass order, starting at north.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        [
            self.north(),
            self.north_east(),
            self.east(),
            self.south_east(),
            self.south(),
            self.south_west(),
            self.west(),
            self.north_west(),
        ]
    }

    /// Neighbours for the given connectivity, in compass order.
    pub fn neighbors(self, connectivity: Connectivity) -> Vec<Coord> {
        match connectivity {
            Connectivity::Four => self.neighbors_4().to_vec(),
            Connectivity::Eight => self.neighbors_8().to_vec(),
        }
    }

    /// Manhattan (taxicab) distance. Cheap.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Euclidean distance. Needs a square root, so prefer
    /// [`manhattan`](Coord::manhattan) in hot loops.
    pub fn distance(self, other: Coord) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Every coordinate at Manhattan distance exactly `radius`, clockwise,
    /// beginning with the one due north of `self`.
    ///
    /// Radius 0 yields `[self]`; radius `r > 0` yields `4 * r` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative.
    pub fn perimeter(self, radius: i32) -> Vec<Coord> {
        assert!(radius >= 0, "negative perimeter radius {radius}");
        if radius == 0 {
            return vec![self];
        }

        let mut ret = Vec::with_capacity(4 * radius as usize);
        let mut cursor = self.shift(0, -radius);
        for leg in [
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::NorthWest,
            Direction::NorthEast,
        ] {
            for _ in 0..radius {
                ret.push(cursor);
                cursor = cursor.step(leg);
            }
        }
        ret
    }

    /// Parse `"x,y"` (surrounding whitespace allowed).
    pub fn from_comma(xy: &str) -> Result<Self, ParseCoordError> {
        let parts: Vec<&str> = xy.trim().split(',').collect();
        let [x, y] = parts[..] else {
            return Err(ParseCoordError::FieldCount(parts.len()));
        };
        let x = x.trim().parse().map_err(|source| ParseCoordError::BadX {
            text: x.to_owned(),
            source,
        })?;
        let y = y.trim().parse().map_err(|source| ParseCoordError::BadY {
            text: y.to_owned(),
            source,
        })?;
        Ok(Self::new(x, y))
    }

    /// Like [`from_comma`](Coord::from_comma), for input that is known to be
    /// well formed.
    ///
    /// # Panics
    ///
    /// Panics with the parse error's message if `xy` is malformed.
    pub fn must_from_comma(xy: &str) -> Self {
        match Self::from_comma(xy) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Errors from parsing `"x,y"` coordinate text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordError {
    #[error("expected two ,-separated parts, got {0}")]
    FieldCount(usize),
    #[error("bad X coordinate {text:?}: {source}")]
    BadX {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("bad Y coordinate {text:?}: {source}")]
    BadY {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_comma(s)
    }
}

// --- trait impls for Coord ---

/// Row-major: by `y`, then `x`.
impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<i32> for Coord {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Which neighbours count as adjacent on a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Cardinal neighbours only.
    #[default]
    Four,
    /// Cardinal and diagonal neighbours.
    Eight,
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An inclusive rectangle: both `min` and `max` are inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Coord,
    pub max: Coord,
}

impl Rect {
    /// Create a rectangle from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The 1×1 rectangle holding only `p`.
    #[inline]
    pub fn point(p: Coord) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x + 1
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y + 1
    }

    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Smallest rectangle holding both `self` and `p`.
    #[inline]
    pub fn extend(self, p: Coord) -> Self {
        Self {
            min: Coord::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Coord::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Bounding rectangle of a set of coordinates, `None` if it is empty.
    pub fn bounding<I: IntoIterator<Item = Coord>>(coords: I) -> Option<Self> {
        coords.into_iter().fold(None, |acc: Option<Rect>, p| {
            Some(acc.map_or(Rect::point(p), |r| r.extend(p)))
        })
    }

    /// Row-major iterator over every coordinate in the rectangle.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Coord::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.min, self.max)
    }
}
