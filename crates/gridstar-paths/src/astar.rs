use std::collections::BinaryHeap;

use gridstar_core::Coord;
use log::{debug, trace};

use crate::pathfinder::Pathfinder;
use crate::state::{INFINITY, NodeRef};
use crate::traits::{Heuristic, TravelCost};

/// Result of a search that may be stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path from start to goal, both included.
    Found(Vec<Coord>),
    /// The goal cannot be reached.
    NoPath,
    /// The search was stopped before it finished.
    Interrupted,
}

impl SearchOutcome {
    /// The path, or an empty vector if none was found.
    pub fn into_path(self) -> Vec<Coord> {
        match self {
            Self::Found(path) => path,
            Self::NoPath | Self::Interrupted => Vec::new(),
        }
    }
}

/// Snapshot passed to the stop callback before each expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// Cells expanded so far.
    pub expanded: usize,
    /// Entries left in the open queue, stale ones included.
    pub frontier: usize,
    /// The cell about to be expanded.
    pub current: Coord,
}

impl<C: TravelCost, H: Heuristic> Pathfinder<C, H> {
    /// Compute a shortest path from start to goal using A*.
    ///
    /// Returns the full path (including both endpoints), or an empty vector
    /// if the goal is unreachable. The result is also kept for
    /// [`get_path`](Pathfinder::get_path).
    pub fn find_path(&mut self) -> Vec<Coord> {
        self.find_path_interruptible(|_| false).into_path()
    }

    /// Like [`find_path`](Pathfinder::find_path), but calls `stop` before
    /// every expansion and gives up as soon as it returns `true`. The
    /// configured `max_expansions` budget stops the search the same way.
    ///
    /// The open set pops the lowest `f` first; among equal `f` it pops the
    /// cell that entered the open set first.
    pub fn find_path_interruptible(
        &mut self,
        mut stop: impl FnMut(&SearchProgress) -> bool,
    ) -> SearchOutcome {
        self.reset_scores();
        self.path.clear();

        if self.start_idx == self.goal_idx {
            self.path.push(self.start_idx);
            debug!("start {} is the goal", self.start);
            return SearchOutcome::Found(vec![self.start]);
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(NodeRef {
            idx: self.start_idx,
            f: self.nodes[self.start_idx].f,
            seq,
        });

        let mut expanded = 0usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].closed || self.nodes[ci].f != current.f {
                continue;
            }

            let cp = self.grid.coord(ci);
            let progress = SearchProgress {
                expanded,
                frontier: open.len() + 1,
                current: cp,
            };
            let over_budget = self.config.max_expansions.is_some_and(|max| expanded >= max);
            if over_budget || stop(&progress) {
                debug!("search interrupted after {expanded} expansions");
                return SearchOutcome::Interrupted;
            }

            self.nodes[ci].closed = true;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            trace!("expand {cp} g={current_g} f={}", current.f);

            let Ok(neighbors) = self.grid.neighbors(cp) else {
                continue;
            };
            for np in neighbors {
                let Some(ni) = self.grid.index(np) else {
                    continue;
                };
                if self.nodes[ni].closed {
                    continue;
                }

                // A cost that overflows, or reaches INFINITY, makes the move
                // unusable.
                let Some(tentative_g) = current_g
                    .checked_add(self.config.cost.cost(cp, np))
                    .filter(|&g| g != INFINITY)
                else {
                    continue;
                };
                if tentative_g < self.nodes[ni].g {
                    let h = self.config.heuristic.estimate(np, self.goal);
                    let n = &mut self.nodes[ni];
                    n.parent = Some(ci);
                    n.g = tentative_g;
                    n.f = tentative_g.saturating_add(h);
                    // A cell already queued is pushed again with its lower f;
                    // the old entry goes stale.
                    seq += 1;
                    open.push(NodeRef { idx: ni, f: n.f, seq });
                }

                if ni == self.goal_idx && self.nodes[ni].parent.is_some() {
                    self.reconstruct(ni);
                    debug!(
                        "path found: {} steps after {expanded} expansions",
                        self.path.len() - 1
                    );
                    return SearchOutcome::Found(self.get_path());
                }
            }
        }

        debug!("no path possible after {expanded} expansions");
        SearchOutcome::NoPath
    }

    /// Follow parent links back from `idx` to the start and store the path
    /// start first.
    fn reconstruct(&mut self, idx: usize) {
        self.path.clear();
        let mut ci = Some(idx);
        while let Some(i) = ci {
            self.path.push(i);
            ci = self.nodes[i].parent;
        }
        self.path.reverse();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gridstar_core::Grid;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::config::SearchConfig;
    use crate::distance::manhattan;
    use crate::state::Cost;

    const NONE: [Coord; 0] = [];

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    /// Every step is one cardinal move and no step lands on an obstacle.
    fn assert_valid_path(grid: &Grid, path: &[Coord], start: Coord, goal: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for w in path.windows(2) {
            assert!((w[1] - w[0]).is_cardinal_step(), "{} -> {}", w[0], w[1]);
        }
        for &p in path {
            assert!(!grid.is_obstacle(p).unwrap(), "{p} is an obstacle");
        }
    }

    /// Shortest step count by breadth-first search, ignoring the pathfinder.
    fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
        let mut dist = vec![usize::MAX; grid.len()];
        let mut queue = VecDeque::new();
        dist[grid.index(start)?] = 0;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            let d = dist[grid.index(p)?];
            if p == goal {
                return Some(d);
            }
            for step in [Coord::DOWN, Coord::RIGHT, Coord::UP, Coord::LEFT] {
                let n = p + step;
                if !grid.is_free(n) {
                    continue;
                }
                let ni = grid.index(n)?;
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    #[test]
    fn empty_grid_corner_to_corner() {
        let grid = Grid::new(5, 5);
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(4, 4), NONE).unwrap();
        let path = pf.find_path();
        assert_eq!(path.len(), 9);
        assert_valid_path(&grid, &path, c(0, 0), c(4, 4));
        assert_eq!(pf.get_path(), path);
        assert_eq!(pf.path_cost(), Some(8));
    }

    #[test]
    fn empty_grid_length_is_manhattan_plus_one() {
        let grid = Grid::new(6, 7);
        let cells: Vec<Coord> = grid.positions().collect();
        for &start in cells.iter().step_by(5) {
            for &goal in cells.iter().step_by(3) {
                let mut pf = Pathfinder::new(&grid, start, goal, NONE).unwrap();
                let path = pf.find_path();
                assert_eq!(path.len(), manhattan(start, goal) as usize + 1);
                assert_valid_path(&grid, &path, start, goal);
            }
        }
    }

    #[test]
    fn wall_blocks_every_route() {
        let grid = Grid::new(3, 3);
        let wall = [c(0, 1), c(1, 1), c(2, 1)];
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(0, 2), wall).unwrap();
        assert!(pf.find_path().is_empty());
        assert!(pf.get_path().is_empty());
        assert_eq!(pf.path_cost(), None);
        assert!(!pf.reached(c(0, 2)));
        assert!(pf.reached(c(2, 0)));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let grid = Grid::new(7, 7);
        let ring = [c(2, 3), c(4, 3), c(3, 2), c(3, 4)];
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(3, 3), ring).unwrap();
        assert_eq!(pf.find_path_interruptible(|_| false), SearchOutcome::NoPath);
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::new(&grid, c(1, 1), c(1, 1), NONE).unwrap();
        assert_eq!(pf.find_path(), vec![c(1, 1)]);
        assert_eq!(pf.get_path(), vec![c(1, 1)]);
        assert_eq!(pf.path_cost(), Some(0));
    }

    #[test]
    fn detour_around_wall() {
        // . X .
        // . X .
        // . . .
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(0, 2), [c(0, 1), c(1, 1)]).unwrap();
        let path = pf.find_path();
        assert_eq!(
            path,
            vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2), c(1, 2), c(0, 2)]
        );
        assert_valid_path(&grid, &path, c(0, 0), c(0, 2));
    }

    #[test]
    fn parents_and_scores_follow_the_path() {
        let grid = Grid::new(4, 4);
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(3, 2), [c(1, 0), c(1, 1)]).unwrap();
        let path = pf.find_path();
        assert!(!path.is_empty());
        for (i, &p) in path.iter().enumerate() {
            let node = pf.node(p).unwrap();
            assert_eq!(node.g, i as Cost);
            assert_eq!(node.f, node.g + manhattan(p, c(3, 2)));
            let expected_parent = if i == 0 { None } else { Some(path[i - 1]) };
            assert_eq!(node.parent, expected_parent);
        }
    }

    #[test]
    fn repeated_searches_agree() {
        let grid = Grid::new(8, 8);
        let obstacles = [c(1, 1), c(2, 1), c(3, 1), c(5, 4), c(5, 5), c(5, 6), c(6, 3)];
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(7, 7), obstacles).unwrap();
        let first = pf.find_path();
        let second = pf.find_path();
        pf.prepare().unwrap();
        pf.prepare().unwrap();
        let third = pf.find_path();
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn reconfiguration_changes_the_result() {
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(0, 2), NONE).unwrap();
        assert_eq!(pf.find_path().len(), 3);
        pf.set_obstacles([c(0, 1), c(1, 1), c(2, 1)]).unwrap();
        assert!(pf.get_path().is_empty());
        assert!(pf.find_path().is_empty());
        pf.set_obstacles([c(0, 1)]).unwrap();
        assert_eq!(pf.find_path().len(), 5);
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rows = rng.random_range(1..9);
            let cols = rng.random_range(1..9);
            let grid = Grid::new(rows, cols);
            let start = c(rng.random_range(0..rows), rng.random_range(0..cols));
            let goal = c(rng.random_range(0..rows), rng.random_range(0..cols));
            let obstacles: Vec<Coord> = grid
                .positions()
                .filter(|&p| p != start && p != goal && rng.random::<f64>() < 0.3)
                .collect();

            let mut pf = Pathfinder::new(&grid, start, goal, obstacles).unwrap();
            let path = pf.find_path();
            match bfs_distance(&grid, start, goal) {
                Some(d) => {
                    assert_eq!(path.len(), d + 1, "{start} -> {goal}");
                    assert_valid_path(&grid, &path, start, goal);
                }
                None => assert!(path.is_empty(), "{start} -> {goal}"),
            }
        }
    }

    #[test]
    fn stop_callback_interrupts() {
        let grid = Grid::new(10, 10);
        let mut pf = Pathfinder::new(&grid, c(0, 0), c(9, 9), NONE).unwrap();
        let mut seen = Vec::new();
        let outcome = pf.find_path_interruptible(|p| {
            seen.push(p.expanded);
            p.expanded == 3
        });
        assert_eq!(outcome, SearchOutcome::Interrupted);
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert!(pf.get_path().is_empty());
        assert_eq!(outcome.into_path(), Vec::<Coord>::new());
    }

    #[test]
    fn expansion_budget_interrupts() {
        let grid = Grid::new(10, 10);
        let config = SearchConfig::default().with_max_expansions(2);
        let mut pf = Pathfinder::with_config(&grid, c(0, 0), c(9, 9), NONE, config).unwrap();
        assert_eq!(
            pf.find_path_interruptible(|_| false),
            SearchOutcome::Interrupted
        );
        assert!(pf.find_path().is_empty());

        let config = SearchConfig::default().with_max_expansions(1000);
        let mut pf = Pathfinder::with_config(&grid, c(0, 0), c(9, 9), NONE, config).unwrap();
        assert_eq!(pf.find_path().len(), 19);
    }

    #[test]
    fn custom_travel_cost_is_used() {
        // Entering row 1 is expensive, so the path hugs rows 0 and 2 where
        // it can; the cost seam is a closure.
        let grid = Grid::new(3, 3);
        let cost = |_from: Coord, to: Coord| -> Cost { if to.row == 1 { 5 } else { 1 } };
        let config = SearchConfig::default().with_cost(cost);
        let mut pf = Pathfinder::with_config(&grid, c(0, 0), c(0, 2), NONE, config).unwrap();
        let path = pf.find_path();
        assert_eq!(path, vec![c(0, 0), c(0, 1), c(0, 2)]);
        assert_eq!(pf.path_cost(), Some(2));
        assert_ne!(pf.node(c(1, 0)).unwrap().g, INFINITY);
        assert_eq!(pf.node(c(1, 0)).unwrap().g, 5);
    }

    #[test]
    fn unusable_costs_never_produce_a_path() {
        let grid = Grid::new(1, 3);

        let config = SearchConfig::default().with_cost(|_: Coord, _: Coord| -> Cost { Cost::MAX });
        let mut pf = Pathfinder::with_config(&grid, c(0, 0), c(0, 2), NONE, config).unwrap();
        assert_eq!(pf.find_path_interruptible(|_| false), SearchOutcome::NoPath);
        assert!(pf.get_path().is_empty());

        // One step fits, the second overflows.
        let config =
            SearchConfig::default().with_cost(|_: Coord, _: Coord| -> Cost { Cost::MAX / 2 + 1 });
        let mut pf = Pathfinder::with_config(&grid, c(0, 0), c(0, 2), NONE, config).unwrap();
        assert_eq!(pf.find_path_interruptible(|_| false), SearchOutcome::NoPath);
        assert!(pf.reached(c(0, 1)));
        assert!(!pf.reached(c(0, 2)));

        // Large but representable costs still find the path.
        let config = SearchConfig::default().with_cost(|_: Coord, _: Coord| -> Cost { Cost::MAX / 4 });
        let mut pf = Pathfinder::with_config(&grid, c(0, 0), c(0, 2), NONE, config).unwrap();
        assert_eq!(pf.find_path(), vec![c(0, 0), c(0, 1), c(0, 2)]);
    }

    #[test]
    fn custom_movement_is_used() {
        use crate::movement::Movement;

        // Only right and down: going up-left is impossible.
        let moves = Movement::new(vec![Coord::RIGHT, Coord::DOWN]).unwrap();
        let grid = Grid::new(4, 4);
        let config = SearchConfig::default().with_movement(moves);
        let mut pf = Pathfinder::with_config(&grid, c(3, 3), c(0, 0), NONE, config).unwrap();
        assert!(pf.find_path().is_empty());
        pf.set_endpoints(c(0, 0), c(3, 3)).unwrap();
        assert_eq!(pf.find_path().len(), 7);
    }

    #[test]
    fn independent_searches_share_a_grid() {
        let grid = Grid::new(5, 5);
        let obstacles = [c(2, 1), c(2, 2), c(2, 3)];
        let mut a = Pathfinder::new(&grid, c(0, 0), c(4, 4), obstacles).unwrap();
        let mut b = Pathfinder::new(&grid, c(4, 0), c(0, 4), obstacles).unwrap();
        let pa = a.find_path();
        let pb = b.find_path();
        assert_valid_path(&grid, &pa, c(0, 0), c(4, 4));
        assert_valid_path(&grid, &pb, c(4, 0), c(0, 4));
        // Scores are per search.
        assert_eq!(a.node(c(0, 0)).unwrap().g, 0);
        assert_eq!(b.node(c(4, 0)).unwrap().g, 0);
        assert_eq!(a.get_path(), pa);
    }
}
