use gridstar_core::Coord;

use crate::state::Cost;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> Cost {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}
