//! The eight compass [`Direction`]s and their rotations.

use std::fmt;
use std::str::FromStr;

use crate::geom::Coord;

/// A compass direction. Variants are declared in compass order, which is also
/// clockwise order, but rotation goes through explicit tables rather than
/// arithmetic on the discriminant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Rotation granularity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// 45°.
    Eighth,
    /// 90°.
    Quarter,
}

impl Direction {
    /// All directions in compass order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal directions in compass order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset of one step in this direction (Y grows down).
    pub const fn offset(self) -> Coord {
        match self {
            Direction::North => Coord::new(0, -1),
            Direction::NorthEast => Coord::new(1, -1),
            Direction::East => Coord::new(1, 0),
            Direction::SouthEast => Coord::new(1, 1),
            Direction::South => Coord::new(0, 1),
            Direction::SouthWest => Coord::new(-1, 1),
            Direction::West => Coord::new(-1, 0),
            Direction::NorthWest => Coord::new(-1, -1),
        }
    }

    /// Rotate clockwise.
    pub const fn cw(self, turn: Turn) -> Self {
        use Direction::*;
        match turn {
            Turn::Eighth => match self {
                North => NorthEast,
                NorthEast => East,
                East => SouthEast,
                SouthEast => South,
                South => SouthWest,
                SouthWest => West,
                West => NorthWest,
                NorthWest => North,
            },
            Turn::Quarter => match self {
                North => East,
                NorthEast => SouthEast,
                East => South,
                SouthEast => SouthWest,
                South => West,
                SouthWest => NorthWest,
                West => North,
                NorthWest => NorthEast,
            },
        }
    }

    /// Rotate counterclockwise.
    pub const fn ccw(self, turn: Turn) -> Self {
        use Direction::*;
        match turn {
            Turn::Eighth => match self {
                North => NorthWest,
                NorthWest => West,
                West => SouthWest,
                SouthWest => South,
                South => SouthEast,
                SouthEast => East,
                East => NorthEast,
                NorthEast => North,
            },
            Turn::Quarter => match self {
                North => West,
                NorthWest => SouthWest,
                West => South,
                SouthWest => SouthEast,
                South => East,
                SouthEast => NorthEast,
                East => North,
                NorthEast => NorthWest,
            },
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        self.cw(Turn::Quarter).cw(Turn::Quarter)
    }

    /// Canonical lowercase abbreviation: `n`, `ne`, `e`, ... `nw`.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// An abbreviation that names no direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bad direction {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the abbreviations produced by [`Direction::abbrev`], in any
    /// ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.abbrev().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_owned()))
    }
}
