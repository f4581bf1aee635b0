use std::fmt;

use gridstar_core::{Coord, GridError};

/// Errors in the inputs of a search, detected before the search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The start coordinate is outside the grid.
    StartOutOfBounds(Coord),
    /// The goal coordinate is outside the grid.
    GoalOutOfBounds(Coord),
    /// An obstacle coordinate is outside the grid.
    ObstacleOutOfBounds(Coord),
    /// The start coordinate is in the obstacle set.
    StartBlocked(Coord),
    /// The goal coordinate is in the obstacle set.
    GoalBlocked(Coord),
    /// A move set is empty or contains the zero offset.
    InvalidMovement,
    /// Direct grid access failed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "start {p} is outside the grid"),
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} is outside the grid"),
            Self::ObstacleOutOfBounds(p) => write!(f, "obstacle {p} is outside the grid"),
            Self::StartBlocked(p) => write!(f, "start {p} is an obstacle"),
            Self::GoalBlocked(p) => write!(f, "goal {p} is an obstacle"),
            Self::InvalidMovement => f.write_str("move set must be non-empty without zero offsets"),
            Self::Grid(e) => write!(f, "grid access failed: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
