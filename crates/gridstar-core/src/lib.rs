//! **gridstar-core** — grid storage for shortest-path search.
//!
//! This crate provides the foundational types used by `gridstar-paths`:
//! a `(row, col)` coordinate, a topology-only cell, and a fixed-size grid
//! with shared storage and row-major traversal.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::Coord;
pub use grid::{Grid, GridIter, RowMajor};
