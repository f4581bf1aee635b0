//! The [`Cell`] type — one grid position and its topology.

use crate::geom::Coord;

/// A single grid cell.
///
/// A cell only carries topology: its coordinate, whether it is blocked, and
/// the passable cells reachable from it in one move. Per-search scores are
/// kept by the search engine, indexed by [`Grid::index`](crate::Grid::index).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Coord,
    pub(crate) obstacle: bool,
    pub(crate) neighbors: Vec<Coord>,
}

impl Cell {
    /// Create a free cell at `pos` with no neighbors.
    #[inline]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            obstacle: false,
            neighbors: Vec::new(),
        }
    }

    /// The coordinate of this cell.
    #[inline]
    pub const fn pos(&self) -> Coord {
        self.pos
    }

    /// Whether this cell is blocked.
    #[inline]
    pub const fn obstacle(&self) -> bool {
        self.obstacle
    }

    /// Passable neighbors, in the order they were built.
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }
}
