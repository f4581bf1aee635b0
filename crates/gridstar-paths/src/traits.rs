use gridstar_core::Coord;

use crate::distance::manhattan;
use crate::state::Cost;

/// Cost of a single move between adjacent cells.
///
/// Any `Fn(Coord, Coord) -> Cost` closure is a travel-cost model.
pub trait TravelCost {
    /// Cost of moving from `from` to the adjacent `to`. Must be > 0.
    fn cost(&self, from: Coord, to: Coord) -> Cost;
}

/// Estimate of the remaining cost to a goal.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> Cost;
}

/// Every move costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl TravelCost for UnitCost {
    #[inline]
    fn cost(&self, _from: Coord, _to: Coord) -> Cost {
        1
    }
}

impl<F> TravelCost for F
where
    F: Fn(Coord, Coord) -> Cost,
{
    #[inline]
    fn cost(&self, from: Coord, to: Coord) -> Cost {
        self(from, to)
    }
}

/// Manhattan distance; admissible and consistent for unit-cost cardinal
/// movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> Cost {
        manhattan(from, to)
    }
}
