//! Random maze generation.
//!
//! Two generators, both producing mazes whose start is the top-left corner
//! and whose goal is the bottom-right corner (the convention of batch maze
//! files):
//! - **Scatter**: every cell independently becomes a wall with a fixed
//!   probability. Goal may end up unreachable.
//! - **Random walk**: starts fully walled and carves road with a
//!   4-directional drunk walk from the start. Goal is forced open but may be
//!   isolated if the walk never reaches it.

use rand::{Rng, RngExt};

use crate::error::MazeError;
use crate::geom::{Direction, Point};
use crate::grid::{Cell, GridMap};

/// Maze generator driven by a random number generator.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze where each cell is a wall with probability
    /// `wall_pct` (0.0–1.0). Start and goal are always road.
    pub fn scatter(&mut self, height: usize, width: usize, wall_pct: f64) -> Result<GridMap, MazeError> {
        let total = GridMap::area(height, width)?;
        let mut cells = Vec::with_capacity(total);
        for _ in 0..total {
            let r: f64 = self.rng.random();
            cells.push(if r < wall_pct { Cell::Wall } else { Cell::Road });
        }
        Self::finish(height, width, cells)
    }

    /// Generate a maze by carving road with a random walk from the start
    /// until `fill_pct` (0.0–1.0) of the area is road.
    pub fn random_walk(&mut self, height: usize, width: usize, fill_pct: f64) -> Result<GridMap, MazeError> {
        let total = GridMap::area(height, width)?;
        let target = ((total as f64 * fill_pct) as usize).clamp(1, total.max(1));
        let mut cells = vec![Cell::Wall; total];
        if total == 0 {
            return Self::finish(height, width, cells);
        }

        let contains = |p: Point| {
            p.y >= 0 && p.x >= 0 && (p.y as usize) < height && (p.x as usize) < width
        };
        let index = |p: Point| p.y as usize * width + p.x as usize;

        let mut pos = Point::ZERO;
        let mut carved = 0usize;
        let step_limit = total.saturating_mul(16);
        for _ in 0..step_limit {
            let i = index(pos);
            if cells[i] == Cell::Wall {
                cells[i] = Cell::Road;
                carved += 1;
                if carved >= target {
                    break;
                }
            }
            let dir = Direction::ALL[self.rng.random_range(0..4usize)];
            let next = pos.step(dir);
            if contains(next) {
                pos = next;
            }
        }

        Self::finish(height, width, cells)
    }

    fn finish(height: usize, width: usize, mut cells: Vec<Cell>) -> Result<GridMap, MazeError> {
        if let Some(first) = cells.first_mut() {
            *first = Cell::Road;
        }
        if let Some(last) = cells.last_mut() {
            *last = Cell::Road;
        }
        let goal = Point::new(height as i32 - 1, width as i32 - 1);
        GridMap::from_cells(height, width, cells, Point::ZERO, goal)
    }
}
