//! A* shortest-path search on 2D grids with obstacles.
//!
//! A [`Pathfinder`] is bound to a [`Grid`](gridstar_core::Grid), a start, a
//! goal and a set of blocked cells. Construction prepares the grid (obstacle
//! flags and per-cell neighbor lists) and the search scores; then
//! [`Pathfinder::find_path`] runs A* and returns the path as coordinates.
//!
//! ```
//! use gridstar_core::{Coord, Grid};
//! use gridstar_paths::Pathfinder;
//!
//! let grid = Grid::new(5, 5);
//! let wall = [Coord::new(1, 1), Coord::new(2, 1), Coord::new(3, 1)];
//! let mut pf = Pathfinder::new(&grid, (0, 0), (4, 4), wall)?;
//! let path = pf.find_path();
//! assert_eq!(path.len(), 9);
//! # Ok::<(), gridstar_paths::ConfigError>(())
//! ```
//!
//! # Extension points
//!
//! | Seam | Default |
//! |---|---|
//! | [`TravelCost`] | [`UnitCost`] (every move costs 1) |
//! | [`Heuristic`] | [`Manhattan`] |
//! | [`Movement`] | [`Movement::cardinal`] (down, right, up, left) |

mod astar;
mod config;
mod distance;
mod error;
mod movement;
mod pathfinder;
mod state;
mod traits;

pub use astar::{SearchOutcome, SearchProgress};
pub use config::SearchConfig;
pub use distance::manhattan;
pub use error::ConfigError;
pub use movement::Movement;
pub use pathfinder::Pathfinder;
pub use state::{Cost, INFINITY, NodeState};
pub use traits::{Heuristic, Manhattan, TravelCost, UnitCost};
