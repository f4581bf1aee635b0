use std::fmt;

use crate::geom::Coord;

/// Errors raised by direct grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// `pos` is not inside a `rows × cols` grid.
    OutOfBounds { pos: Coord, rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "coordinate {pos} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
