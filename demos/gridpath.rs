//! Terminal path-search demo using crossterm.
//!
//! Run: cargo run --bin gridpath -- --algorithm dijkstra --seed 7

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use gridpath_demo::{ReplayConfig, Screen, load_scenario, overlay, save_scenario, summary};
use gridpath_gen::{MapGen, ScatterConfig};
use gridpath_search::{Adjacency, Algorithm, SearchConfig, SearchRequest, search};

/// Find a path across a grid and replay how the search explored it.
#[derive(Parser, Debug)]
#[command(name = "gridpath")]
#[command(version)]
struct Args {
    /// Grid to load: a `.json` snapshot or an ASCII map
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Seed for a generated grid (ignored with --map)
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Rows of a generated grid
    #[arg(long, default_value_t = 20)]
    rows: i32,

    /// Columns of a generated grid
    #[arg(long, default_value_t = 30)]
    cols: i32,

    /// Obstacle probability for a generated grid
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// bfs, dijkstra or astar
    #[arg(short, long, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,

    /// Allow diagonal moves
    #[arg(long)]
    diagonal: bool,

    /// Replay speed multiplier for the default pacing (0 = instant)
    #[arg(long, default_value_t = 1.0)]
    pace: f64,

    /// Print the result as text instead of animating it
    #[arg(long)]
    plain: bool,

    /// Write the grid to this file as a JSON snapshot
    #[arg(long)]
    export: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if !(0.0..=1.0).contains(&args.density) {
        return Err(format!("invalid density {} (expected 0.0 to 1.0)", args.density).into());
    }
    let pacing = ReplayConfig::default().scaled(args.pace)?;

    let scenario = match &args.map {
        Some(path) => load_scenario(path)?,
        None => MapGen::seeded(args.rows, args.cols, args.seed).generate(&ScatterConfig {
            rows: args.rows,
            cols: args.cols,
            obstacle_density: args.density,
            ..ScatterConfig::default()
        }),
    };
    if let Some(path) = &args.export {
        save_scenario(path, &scenario)?;
    }

    let config = SearchConfig {
        algorithm: args.algorithm,
        adjacency: if args.diagonal {
            Adjacency::Eight
        } else {
            Adjacency::Four
        },
        ..SearchConfig::default()
    };
    let request = SearchRequest::from_markers(scenario.start, scenario.end)?.with_config(config);
    let report = search(&scenario.grid, &request)?;
    log::info!("{}", summary(&report));

    if args.plain {
        print!("{}", overlay(&scenario.grid, &report));
        println!("{}", summary(&report));
        return Ok(());
    }

    let mut screen = Screen::open()?;
    screen.replay(&scenario.grid, &report, pacing)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
