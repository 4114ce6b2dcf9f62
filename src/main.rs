//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use ascii_maze::{
    CollapsePolicy, CostTable, Grid, MazeParser, ParseOptions, PathError, PathFinder, Point,
};
use clap::Parser;
use itertools::Itertools;

/// The shortest way through an ASCII-art maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also collapse doubled spaces in the header row, not only doubled dashes
    #[arg(long)]
    collapse_spaces: bool,

    /// Start coordinate `x,y`. Defaults to the first border opening.
    #[arg(long)]
    start: Option<Point>,

    /// End coordinate `x,y`. Defaults to the second border opening.
    #[arg(long)]
    end: Option<Point>,

    /// Print the maze with the path marked
    #[arg(short, long)]
    overlay: bool,

    /// Print search costs of every visited cell
    #[arg(short, long)]
    costs: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read maze from {}", args.file.display()))?
    };

    let options = ParseOptions {
        collapse: if args.collapse_spaces {
            CollapsePolicy::DashesAndSpaces
        } else {
            CollapsePolicy::Dashes
        },
    };
    let grid = MazeParser::new(options)
        .parse(&text)
        .context("Failed to parse maze")?;
    let finder = PathFinder::load_maze(&grid);

    let start = args.start.or(finder.start()).ok_or(PathError::MissingStart)?;
    let end = args.end.or(finder.end()).ok_or(PathError::MissingEnd)?;

    let mut table = CostTable::new();
    let path = finder.find_path_observed(start, end, &mut table)?;

    match &path {
        Some(path) => {
            let steps = if path == &[start] { 0 } else { path.len() };
            println!("The shortest path from {start} to {end} is {steps} steps.")
        }
        None => println!("There is no way from {start} to {end}."),
    }

    if args.overlay {
        println!("{}", render_overlay(&grid, start, path.as_deref().unwrap_or(&[])));
    }

    if args.costs {
        for (point, costs) in table.iter() {
            println!(
                "{point}: g={} h={} f={}",
                costs.g_cost, costs.h_cost, costs.f_cost
            );
        }
    }
    Ok(())
}

/// Maze text with `S` at the start, `.` along the path and `E` at its end
fn render_overlay(grid: &Grid, start: Point, path: &[Point]) -> String {
    let mut symbols: Vec<Vec<char>> = grid
        .rows()
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect();

    for point in path {
        symbols[point.y][point.x] = '.';
    }
    if let Some(end) = path.last() {
        symbols[end.y][end.x] = 'E';
    }
    symbols[start.y][start.x] = 'S';

    symbols.iter().map(|row| row.iter().join("")).join("\n")
}
