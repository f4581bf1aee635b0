use gridstar_core::Coord;

/// Path cost. Scores are unsigned, so they are never negative.
pub type Cost = u32;

/// Sentinel score meaning "not reached yet".
pub const INFINITY: Cost = Cost::MAX;

/// Read-only view of the search scores of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    /// Best known cost from the start.
    pub g: Cost,
    /// `g` plus the heuristic estimate to the goal.
    pub f: Cost,
    /// Predecessor on the best known path.
    pub parent: Option<Coord>,
}

// ---------------------------------------------------------------------------
// Internal per-cell search state, indexed like the grid
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: Cost,
    pub(crate) f: Cost,
    pub(crate) parent: Option<usize>,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: INFINITY,
            f: INFINITY,
            parent: None,
            closed: false,
        }
    }
}

/// Open-set entry, ordered for use in `BinaryHeap`.
///
/// The heap pops the smallest `f` first; among equal `f` it pops the entry
/// pushed first (`seq`).
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: Cost,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
