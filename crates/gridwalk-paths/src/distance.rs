use gridwalk_core::Coord;

use crate::traits::Cost;

/// Manhattan (L1) distance, admissible for 4-connected unit-cost grids.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> Cost {
    Cost::from(a.manhattan(b))
}

/// Chebyshev (L∞) distance, admissible for 8-connected unit-cost grids.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> Cost {
    Cost::from(a.chebyshev(b))
}
