//! Solve the sample scenario and print the grid before and after.

use std::io::Write;
use std::time::Instant;

use gridstar_core::{Coord, Grid};
use gridstar_demo::{COLS, ROWS, format_path, render, sample_obstacles};
use gridstar_paths::Pathfinder;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let started = Instant::now();
    let grid = Grid::new(ROWS, COLS);
    let start = Coord::new(0, 0);
    let goal = Coord::new(ROWS - 1, COLS - 1);
    let mut pf = Pathfinder::new(&grid, start, goal, sample_obstacles())?;

    println!("{}", render(&pf));
    let path = pf.find_path();
    if path.is_empty() {
        info!("no path possible from {start} to {goal}");
    } else {
        info!("path found: {} steps", path.len() - 1);
    }
    println!("{}", render(&pf));
    println!("{}", format_path(&pf.get_path()));

    info!("completed in {:?}", started.elapsed());
    Ok(())
}
