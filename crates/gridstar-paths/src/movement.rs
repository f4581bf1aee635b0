use gridstar_core::Coord;

use crate::error::ConfigError;

/// Ordered list of allowed move offsets.
///
/// The order is the order in which neighbors are recorded on each cell, which
/// in turn fixes how ties between equally good paths are broken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Movement {
    dirs: Vec<Coord>,
}

impl Default for Movement {
    fn default() -> Self {
        Self::cardinal()
    }
}

impl Movement {
    /// The four cardinal moves: down, right, up, left.
    pub fn cardinal() -> Self {
        Self {
            dirs: vec![Coord::DOWN, Coord::RIGHT, Coord::UP, Coord::LEFT],
        }
    }

    /// A custom move set. Offsets are tried in the given order.
    ///
    /// Fails if `dirs` is empty or contains the zero offset.
    pub fn new(dirs: Vec<Coord>) -> Result<Self, ConfigError> {
        if dirs.is_empty() || dirs.contains(&Coord::ZERO) {
            return Err(ConfigError::InvalidMovement);
        }
        Ok(Self { dirs })
    }

    /// The move offsets, in order.
    #[inline]
    pub fn directions(&self) -> &[Coord] {
        &self.dirs
    }

    /// Coordinates one move away from `p`, keeping only those for which
    /// `keep` returns `true`. Moves that overflow the coordinate range are
    /// dropped.
    pub fn neighbors(&self, p: Coord, keep: impl Fn(Coord) -> bool) -> Vec<Coord> {
        self.dirs
            .iter()
            .filter_map(|&d| p.checked_add(d))
            .filter(|&n| keep(n))
            .collect()
    }
}

impl TryFrom<Vec<Coord>> for Movement {
    type Error = ConfigError;

    fn try_from(dirs: Vec<Coord>) -> Result<Self, ConfigError> {
        Self::new(dirs)
    }
}

impl From<Movement> for Vec<Coord> {
    fn from(m: Movement) -> Self {
        m.dirs
    }
}
