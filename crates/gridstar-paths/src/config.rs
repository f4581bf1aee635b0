use crate::movement::Movement;
use crate::traits::{Manhattan, UnitCost};

/// Search configuration.
///
/// The type parameters pick the travel-cost model and the heuristic. The
/// defaults give unit-cost cardinal moves guided by Manhattan distance.
#[derive(Debug, Clone)]
pub struct SearchConfig<C = UnitCost, H = Manhattan> {
    /// Allowed moves, in neighbor order.
    pub movement: Movement,
    /// Travel-cost model.
    pub cost: C,
    /// Heuristic estimate to the goal.
    pub heuristic: H,
    /// Stop after this many expansions. `None` means no limit.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movement: Movement::cardinal(),
            cost: UnitCost,
            heuristic: Manhattan,
            max_expansions: None,
        }
    }
}

impl<C, H> SearchConfig<C, H> {
    /// Set the move set (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Limit the number of expansions per search (builder).
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Replace the travel-cost model (builder).
    pub fn with_cost<C2>(self, cost: C2) -> SearchConfig<C2, H> {
        SearchConfig {
            movement: self.movement,
            cost,
            heuristic: self.heuristic,
            max_expansions: self.max_expansions,
        }
    }

    /// Replace the heuristic (builder).
    pub fn with_heuristic<H2>(self, heuristic: H2) -> SearchConfig<C, H2> {
        SearchConfig {
            movement: self.movement,
            cost: self.cost,
            heuristic,
            max_expansions: self.max_expansions,
        }
    }
}
