//! Batch driver for the maze search engine.
//!
//! Reads batch maze files, runs one independent search per maze and writes
//! the results. All file handling lives here; the search crates never touch
//! the filesystem.

pub mod batch;
pub mod cli;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};

use log::{info, warn};
use maze_core::{GridMap, MapGen, MazeError, Point};
use maze_paths::{SearchEngine, SearchReport, Strategy};
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;

pub use batch::{MazeCase, ParseError, ParseErrorKind};
pub use cli::{Cli, Command, GenerateArgs, SolveArgs};

/// Errors surfaced by the driver.
#[derive(Debug)]
pub enum SolverError {
    Io(io::Error),
    Parse(ParseError),
    Maze(MazeError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Maze(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Maze(e) => Some(e),
        }
    }
}

impl From<io::Error> for SolverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseError> for SolverError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<MazeError> for SolverError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

/// Search every case with a fresh engine and write the results to `out`.
pub fn solve_cases<W: Write>(
    cases: &[MazeCase],
    strategy: Strategy,
    out: &mut W,
) -> Result<Vec<SearchReport>, SolverError> {
    let mut reports = Vec::with_capacity(cases.len());
    for (i, case) in cases.iter().enumerate() {
        let report = SearchEngine::new(&case.grid, strategy).run();
        let explored = report.outcome.explored().len();
        match report.outcome.solution() {
            Some(s) => info!(
                "maze {} (line {}): {}x{}, {} steps, {} explored",
                i + 1,
                case.line,
                case.grid.height(),
                case.grid.width(),
                s.cost(),
                explored
            ),
            None => warn!(
                "maze {} (line {}): goal unreachable, {} explored",
                i + 1,
                case.line,
                explored
            ),
        }
        if report.stats.reopened > 0 {
            info!(
                "maze {}: {} expanded cells were reopened",
                i + 1,
                report.stats.reopened
            );
        }
        batch::write_outcome(out, &report.outcome)?;
        reports.push(report);
    }
    Ok(reports)
}

/// The `solve` command.
pub fn run_solve(args: &SolveArgs) -> Result<(), SolverError> {
    let input = fs::read_to_string(&args.input)?;
    let cases = batch::parse(&input)?;
    info!(
        "solving {} mazes from {} with {}",
        cases.len(),
        args.input.display(),
        args.strategy
    );

    let mut out = BufWriter::new(fs::File::create(&args.output)?);
    let reports = solve_cases(&cases, args.strategy, &mut out)?;
    out.flush()?;

    if args.show {
        for (case, report) in cases.iter().zip(&reports) {
            println!("{}\n", render(&case.grid, report));
        }
    }
    info!("wrote {}", args.output.display());
    Ok(())
}

/// The `generate` command.
pub fn run_generate(args: &GenerateArgs) -> Result<(), SolverError> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("generating {} mazes with seed {seed}", args.count);
    let grids = generate(StdRng::seed_from_u64(seed), args)?;
    let mut out = BufWriter::new(fs::File::create(&args.output)?);
    batch::write_mazes(&mut out, &grids)?;
    out.flush()?;
    info!("wrote {} mazes to {}", grids.len(), args.output.display());
    Ok(())
}

fn generate(rng: StdRng, args: &GenerateArgs) -> Result<Vec<GridMap>, SolverError> {
    let mut mg = MapGen::new(rng);
    let mut grids = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        grids.push(mg.scatter(args.height, args.width, args.wall_pct)?);
    }
    Ok(grids)
}

/// Draw `grid` with the path marked `*` and other explored cells `o`.
pub fn render(grid: &GridMap, report: &SearchReport) -> String {
    let path: HashSet<Point> = report.outcome.path().iter().copied().collect();
    let explored: HashSet<Point> = report.outcome.explored().iter().copied().collect();
    grid.render(|p| {
        if path.contains(&p) {
            Some('*')
        } else if explored.contains(&p) {
            Some('o')
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn solve_cases_writes_every_maze() {
        let cases = batch::parse("2\n\n1 3\n0,0,0\n\n2 2\n0,1\n1,0\n").unwrap();
        let mut out = Vec::new();
        let reports = solve_cases(&cases, Strategy::BreadthFirst, &mut out).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].outcome.is_found());
        assert!(!reports[1].outcome.is_found());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 0\n0 1\n0 2\n(0, 0)(0, 1)(0, 2)\n\n0 0\n\n\n"
        );
    }

    #[test]
    fn render_marks_path_and_explored() {
        let grid = maze_core::layout::parse("S..\n.#.\n..G").unwrap();
        let report = SearchEngine::new(&grid, Strategy::BreadthFirst).run();
        let drawn = render(&grid, &report);
        assert_eq!(drawn.lines().count(), 3);
        assert!(drawn.starts_with('S'));
        assert!(drawn.ends_with('G'));
        assert_eq!(drawn.matches('*').count(), report.outcome.path().len() - 2);
    }

    #[test]
    fn render_marks_unreachable_search() {
        let grid = maze_core::layout::parse("S.#\n.##\n##G").unwrap();
        let report = SearchEngine::new(&grid, Strategy::default()).run();
        assert!(!report.outcome.is_found());
        assert_eq!(render(&grid, &report), "So#\no##\n##G");
    }

    #[test]
    fn generate_is_seeded() {
        let args = GenerateArgs {
            output: PathBuf::from("unused.txt"),
            count: 3,
            height: 5,
            width: 6,
            wall_pct: 0.25,
            seed: Some(11),
        };
        let a = generate(StdRng::seed_from_u64(11), &args).unwrap();
        let b = generate(StdRng::seed_from_u64(11), &args).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
        assert!(a.iter().all(|g| g.height() == 5 && g.width() == 6));
    }

    #[test]
    fn generate_rejects_empty_dimensions() {
        let args = GenerateArgs {
            output: PathBuf::from("unused.txt"),
            count: 1,
            height: 0,
            width: 6,
            wall_pct: 0.25,
            seed: None,
        };
        let err = generate(StdRng::seed_from_u64(0), &args).unwrap_err();
        assert!(matches!(err, SolverError::Maze(MazeError::EmptyGrid)));
    }
}
