use std::collections::BTreeSet;

use gridstar_core::{Coord, Grid, GridError};
use log::debug;

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::state::{Cost, INFINITY, Node, NodeState};
use crate::traits::{Heuristic, Manhattan, TravelCost, UnitCost};

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// A* search between two cells of a [`Grid`].
///
/// The pathfinder holds a handle on the caller's grid (clones of a `Grid`
/// share storage). Preparation writes obstacle flags and neighbor lists onto
/// that grid; search scores live in the pathfinder, indexed by
/// [`Grid::index`].
pub struct Pathfinder<C = UnitCost, H = Manhattan> {
    pub(crate) grid: Grid,
    pub(crate) start: Coord,
    pub(crate) goal: Coord,
    obstacles: BTreeSet<Coord>,
    pub(crate) config: SearchConfig<C, H>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) start_idx: usize,
    pub(crate) goal_idx: usize,
    /// Cell indices of the last successful path, start first.
    pub(crate) path: Vec<usize>,
}

impl Pathfinder {
    /// Bind a pathfinder to `grid` with unit travel cost, cardinal moves and
    /// the Manhattan heuristic, and prepare it.
    pub fn new(
        grid: &Grid,
        start: impl Into<Coord>,
        goal: impl Into<Coord>,
        obstacles: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, ConfigError> {
        Self::with_config(grid, start, goal, obstacles, SearchConfig::default())
    }
}

impl<C: TravelCost, H: Heuristic> Pathfinder<C, H> {
    /// Bind a pathfinder to `grid` with an explicit configuration, and
    /// prepare it.
    pub fn with_config(
        grid: &Grid,
        start: impl Into<Coord>,
        goal: impl Into<Coord>,
        obstacles: impl IntoIterator<Item = Coord>,
        config: SearchConfig<C, H>,
    ) -> Result<Self, ConfigError> {
        let mut pf = Self {
            grid: grid.clone(),
            start: start.into(),
            goal: goal.into(),
            obstacles: obstacles.into_iter().collect(),
            config,
            nodes: vec![Node::default(); grid.len()],
            start_idx: 0,
            goal_idx: 0,
            path: Vec::new(),
        };
        pf.prepare()?;
        Ok(pf)
    }

    /// Prepare the grid and the search state.
    ///
    /// Resets every obstacle flag, places the configured obstacles, rebuilds
    /// every cell's neighbor list and resets all scores. Inputs are checked
    /// before the grid is touched, so a failed call leaves the grid as it
    /// was. Calling it again with the same inputs gives the same state.
    pub fn prepare(&mut self) -> Result<(), ConfigError> {
        let start_idx = self
            .grid
            .index(self.start)
            .ok_or(ConfigError::StartOutOfBounds(self.start))?;
        let goal_idx = self
            .grid
            .index(self.goal)
            .ok_or(ConfigError::GoalOutOfBounds(self.goal))?;
        if let Some(&p) = self.obstacles.iter().find(|&&p| !self.grid.valid(p)) {
            return Err(ConfigError::ObstacleOutOfBounds(p));
        }
        if self.obstacles.contains(&self.start) {
            return Err(ConfigError::StartBlocked(self.start));
        }
        if self.obstacles.contains(&self.goal) {
            return Err(ConfigError::GoalBlocked(self.goal));
        }

        // Obstacles first: neighbor lists must not include them.
        self.grid.clear_obstacles();
        for &p in &self.obstacles {
            self.grid.set_obstacle(p, true)?;
        }
        self.build_neighbors()?;

        self.start_idx = start_idx;
        self.goal_idx = goal_idx;
        self.reset_scores();
        self.path.clear();

        debug!(
            "prepared {}x{} grid: {} obstacles, start {}, goal {}",
            self.grid.rows(),
            self.grid.cols(),
            self.obstacles.len(),
            self.start,
            self.goal
        );
        Ok(())
    }

    fn build_neighbors(&self) -> Result<(), GridError> {
        let movement = &self.config.movement;
        for p in self.grid.positions() {
            let neighbors = movement.neighbors(p, |n| self.grid.is_free(n));
            self.grid.set_neighbors(p, neighbors)?;
        }
        Ok(())
    }

    /// Reset parents and scores: everything unreached except the start.
    pub(crate) fn reset_scores(&mut self) {
        for n in self.nodes.iter_mut() {
            *n = Node::default();
        }
        let h = self.config.heuristic.estimate(self.start, self.goal);
        let start = &mut self.nodes[self.start_idx];
        start.g = 0;
        start.f = h;
    }

    /// Replace the obstacle set and prepare again.
    ///
    /// On error the previous obstacle set is kept.
    pub fn set_obstacles(
        &mut self,
        obstacles: impl IntoIterator<Item = Coord>,
    ) -> Result<(), ConfigError> {
        let previous = std::mem::replace(&mut self.obstacles, obstacles.into_iter().collect());
        self.prepare().inspect_err(|_| self.obstacles = previous)
    }

    /// Replace the start and goal and prepare again.
    ///
    /// On error the previous endpoints are kept.
    pub fn set_endpoints(
        &mut self,
        start: impl Into<Coord>,
        goal: impl Into<Coord>,
    ) -> Result<(), ConfigError> {
        let previous = (self.start, self.goal);
        self.start = start.into();
        self.goal = goal.into();
        self.prepare().inspect_err(|_| (self.start, self.goal) = previous)
    }
}

impl<C, H> Pathfinder<C, H> {
    /// The grid this pathfinder works on.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Goal coordinate.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The obstacle set, in row-major order.
    #[inline]
    pub fn obstacles(&self) -> &BTreeSet<Coord> {
        &self.obstacles
    }

    /// The search configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig<C, H> {
        &self.config
    }

    /// Coordinates of the last path found, start first. Empty if the last
    /// search failed or no search has run.
    pub fn get_path(&self) -> Vec<Coord> {
        self.path.iter().map(|&i| self.grid.coord(i)).collect()
    }

    /// Cost of the last path found.
    pub fn path_cost(&self) -> Option<Cost> {
        let &last = self.path.last()?;
        Some(self.nodes[last].g)
    }

    /// Search scores of the cell at `p`.
    pub fn node(&self, p: Coord) -> Result<NodeState, GridError> {
        let idx = self.grid.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
        })?;
        let n = &self.nodes[idx];
        Ok(NodeState {
            g: n.g,
            f: n.f,
            parent: n.parent.map(|i| self.grid.coord(i)),
        })
    }

    /// Whether the cell at `p` has been reached by the last search.
    pub fn reached(&self, p: Coord) -> bool {
        self.grid
            .index(p)
            .is_some_and(|i| self.nodes[i].g != INFINITY)
    }
}
