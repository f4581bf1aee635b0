//! Text rendering and the sample scenario used by the `gridstar-demo` binary.

use std::collections::HashSet;

use gridstar_core::Coord;
use gridstar_paths::Pathfinder;

pub const ROWS: i32 = 10;
pub const COLS: i32 = 10;

const OBSTACLE: char = 'X';
const START: char = 'S';
const GOAL: char = 'G';
const PATH: char = 'o';
const FREE: char = '.';

/// Render the grid of `pf`, one line per row.
///
/// Obstacles win over everything, then start, goal and the last path found.
pub fn render<C, H>(pf: &Pathfinder<C, H>) -> String {
    let grid = pf.grid();
    let path: HashSet<Coord> = pf.get_path().into_iter().collect();
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for cell in grid.iter() {
        let p = cell.pos();
        let ch = if cell.obstacle() {
            OBSTACLE
        } else if p == pf.start() {
            START
        } else if p == pf.goal() {
            GOAL
        } else if path.contains(&p) {
            PATH
        } else {
            FREE
        };
        out.push(ch);
        if p.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Format a path as `(r, c) -> (r, c) -> ...`.
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Walls of the sample scenario on a `ROWS × COLS` grid: a short wall next to
/// the start, a wall hanging from the top, one rising from the bottom, and a
/// stub beside the goal.
pub fn sample_obstacles() -> Vec<Coord> {
    let mid = COLS / 2;
    let mut obstacles = Vec::new();
    obstacles.extend((0..5).map(|row| Coord::new(row, 1)));
    obstacles.extend((0..6).map(|i| Coord::new(ROWS - 1 - i, mid)));
    obstacles.extend((1..7).map(|row| Coord::new(row, mid - 2)));
    obstacles.push(Coord::new(ROWS - 1, COLS - 2));
    obstacles.push(Coord::new(ROWS - 1, COLS - 3));
    obstacles
}
