//! maze-solver: batch BFS / A* maze solver.

use std::io::Write;

use clap::Parser;
use maze_solver::{Cli, Command, run_generate, run_solve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Solve(args) => run_solve(args)?,
        Command::Generate(args) => run_generate(args)?,
    }
    Ok(())
}
