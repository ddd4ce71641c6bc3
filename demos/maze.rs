//! Headless maze demo: scatter walls on a square grid, run the search and
//! print the board.
//!
//! Run: cargo run --bin maze -- --size 20 --density 0.3 --seed 7

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::info;
use pathgrid_core::{Grid, Pos};
use pathgrid_demos::{parse_pos, scatter_walls};
use pathgrid_search::{AStar, SearchResult, cancel};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of the square grid.
    #[arg(short, long, default_value_t = 20)]
    size: i32,

    /// Probability that a cell becomes a wall.
    #[arg(short, long, default_value_t = 0.25)]
    density: f64,

    /// Seed for the obstacle field. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as ROW,COL. Defaults to the top-left corner.
    #[arg(long, value_parser = parse_pos)]
    start: Option<Pos>,

    /// Goal cell as ROW,COL. Defaults to the bottom-right corner.
    #[arg(long, value_parser = parse_pos)]
    goal: Option<Pos>,

    /// Cancel after this many expanded cells.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Cancel after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the board after every settled cell.
    #[arg(long)]
    animate: bool,
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(args.size)?;
    let start = args.start.unwrap_or(Pos::ZERO);
    let goal = args
        .goal
        .unwrap_or(Pos::new(args.size - 1, args.size - 1));
    grid.place(start)?;
    grid.place(goal)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let walls = scatter_walls(&mut grid, args.density, &[start, goal], &mut rng)?;
    grid.recompute_neighbors();
    info!("{}x{} grid, {walls} walls, {start} -> {goal}", args.size, args.size);

    let mut by_steps = cancel::after_polls(args.max_steps.unwrap_or(usize::MAX));
    let mut by_time = args
        .timeout_ms
        .map(|ms| cancel::timeout(Duration::from_millis(ms)));
    let animate = args.animate;
    let mut frame = 0usize;

    let mut engine = AStar::new();
    let result = engine.run(
        &mut grid,
        start,
        goal,
        |g| {
            frame += 1;
            if animate {
                println!("-- frame {frame}\n{g}\n");
            }
        },
        || by_steps() || by_time.as_mut().is_some_and(|expired| expired()),
    )?;

    println!("{grid}");
    let stats = engine.stats();
    info!(
        "expanded {}, pushed {}, relaxed {}",
        stats.expanded, stats.pushed, stats.relaxed
    );
    match result {
        SearchResult::Found(path) => println!("path of {} steps", path.len()),
        SearchResult::Exhausted => println!("no path"),
        SearchResult::Cancelled => println!("cancelled after {} expansions", stats.expanded),
    }
    Ok(())
}
