//! Shortest-path search on grid mazes.
//!
//! This crate finds a path between the start and goal of a
//! [`GridMap`](maze_core::GridMap) using one of two strategies:
//!
//! - **Breadth-first** search ([`Strategy::BreadthFirst`]): FIFO frontier,
//!   each cell opened at most once.
//! - **A\*** search ([`Strategy::AStar`]): priority frontier ordered by
//!   `back + weight * manhattan`, then squared Euclidean distance to the
//!   goal. With [`Weighting::Plain`] paths are optimal; an inflated weight
//!   trades optimality for fewer expansions.
//!
//! Both report the cells in the order they were expanded together with the
//! path. Every step costs 1 and movement is 4-directional (left, right, up,
//! down, in that expansion order).
//!
//! # Engine
//!
//! A [`SearchEngine`] owns all mutable state of one search and is consumed
//! by [`SearchEngine::run`]. Nodes live in an append-only [`NodeArena`] and
//! refer to their parent by [`NodeId`]. When A* finds a cheaper route to a
//! cell it opens a fresh node and bumps the cell's revision; the outdated
//! frontier entry is discarded when it is popped.
//!
//! | Trait | Role |
//! |---|---|
//! | [`Frontier`] | open-set ordering ([`FifoFrontier`], [`PriorityFrontier`]) |
//! | [`Expansion`] | node costs and acceptance rule ([`BreadthFirst`], [`BestFirst`]) |

mod astar;
mod bfs;
mod distance;
mod engine;
mod frontier;
mod marks;
mod neighbors;
mod node;
mod path;
mod traits;

pub use astar::{BestFirst, Weighting};
pub use bfs::BreadthFirst;
pub use distance::{manhattan, squared_euclidean};
pub use engine::{
    ParseStrategyError, SearchEngine, SearchOutcome, SearchReport, SearchStats, Solution,
    Strategy,
};
pub use frontier::{FifoFrontier, Frontier, PriorityFrontier};
pub use neighbors::Neighbors;
pub use node::{NodeArena, NodeId, SearchNode};
pub use traits::Expansion;

use maze_core::{Cell, GridMap, MazeError, Point};

/// Search `grid` from its start to its goal.
pub fn search(grid: &GridMap, strategy: Strategy) -> SearchOutcome {
    SearchEngine::new(grid, strategy).run().outcome
}

/// Validate `rows`, `start` and `goal` as a maze and search it.
///
/// Fails with an invalid-input [`MazeError`] if the grid is malformed or an
/// endpoint is out of bounds or on a wall. An unreachable goal is not an
/// error but [`SearchOutcome::NotFound`].
pub fn solve(
    rows: Vec<Vec<Cell>>,
    start: Point,
    goal: Point,
    strategy: Strategy,
) -> Result<SearchOutcome, MazeError> {
    let grid = GridMap::new(rows, start, goal)?;
    Ok(search(&grid, strategy))
}
