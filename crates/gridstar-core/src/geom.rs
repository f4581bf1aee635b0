//! Geometry primitive: [`Coord`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, so `(+1, 0)` moves one row down.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D grid coordinate.
///
/// Components are signed so that direction offsets such as `(-1, 0)` can be
/// represented and added without underflow. A coordinate that names a cell
/// is always non-negative; see [`Grid::valid`](crate::Grid::valid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One row down.
    pub const DOWN: Self = Self { row: 1, col: 0 };
    /// One column right.
    pub const RIGHT: Self = Self { row: 0, col: 1 };
    /// One row up.
    pub const UP: Self = Self { row: -1, col: 0 };
    /// One column left.
    pub const LEFT: Self = Self { row: 0, col: -1 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Component-wise addition, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.row.checked_add(rhs.row), self.col.checked_add(rhs.col)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Whether this is a single cardinal step (exactly one of the components
    /// is ±1 and the other is 0).
    #[inline]
    pub const fn is_cardinal_step(self) -> bool {
        (self.row.abs() + self.col.abs()) == 1
    }
}

// --- trait impls for Coord ---

/// Row-major ordering: rows first, then columns.
impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}
