//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use maze_paths::Strategy;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve batches of grid mazes with BFS or A*", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve every maze in a batch file and write the results
    Solve(SolveArgs),
    /// Write a batch file of random mazes
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Batch file to read
    pub input: PathBuf,

    /// Where to write results
    #[clap(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Search strategy: bfs, astar, greedy or weighted:<k>
    #[clap(short, long, default_value = "astar")]
    pub strategy: Strategy,

    /// Print each maze with its path to stdout
    #[clap(long)]
    pub show: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Batch file to write
    pub output: PathBuf,

    /// Number of mazes
    #[clap(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Rows per maze
    #[clap(long, default_value_t = 10)]
    pub height: usize,

    /// Columns per maze
    #[clap(long, default_value_t = 10)]
    pub width: usize,

    /// Probability of each cell being a wall
    #[clap(long, default_value_t = 0.3)]
    pub wall_pct: f64,

    /// Seed for reproducible output
    #[clap(long)]
    pub seed: Option<u64>,
}
