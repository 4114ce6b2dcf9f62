//! CLI for maze generation

use ascii_maze::maze_generator::MazeGenerator;
use clap::Parser;

/// Random ASCII-art maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of room rows
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Number of room columns
    #[arg(long, default_value_t = 12)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it to stdout
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    println!("{}", gen.generate_maze(args.rows, args.cols));
    Ok(())
}
