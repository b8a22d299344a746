//! The [`GridMap`] type: an immutable, validated maze.
//!
//! A `GridMap` owns a row-major buffer of [`Cell`]s together with the start
//! and goal coordinates of a search. All invariants (rectangular, non-empty,
//! endpoints in bounds and on road cells) are checked once at construction,
//! so searches can rely on them without re-validating.

use crate::error::{Endpoint, MazeError};
use crate::geom::Point;

/// A maze cell: walkable road or blocking wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Road,
    Wall,
}

impl Cell {
    /// Decode the numeric encoding used by maze files: `0` road, `1` wall.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Cell::Road),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }

    /// The numeric encoding of this cell.
    pub const fn code(self) -> i32 {
        match self {
            Cell::Road => 0,
            Cell::Wall => 1,
        }
    }

    #[inline]
    pub const fn is_road(self) -> bool {
        matches!(self, Cell::Road)
    }
}

/// An immutable rectangular maze with a start and a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    cells: Vec<Cell>,
    height: i32,
    width: i32,
    start: Point,
    goal: Point,
}

impl GridMap {
    /// Build a map from rows of cells.
    pub fn new(rows: Vec<Vec<Cell>>, start: Point, goal: Point) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Self::from_cells(height, width, cells, start, goal)
    }

    /// Build a map from rows of numeric cell codes (`0` road, `1` wall).
    pub fn from_codes(rows: &[Vec<i32>], start: Point, goal: Point) -> Result<Self, MazeError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(y, r)| {
                r.iter()
                    .enumerate()
                    .map(|(x, &code)| {
                        Cell::from_code(code).ok_or(MazeError::UnknownCell {
                            code,
                            pos: Point::new(y as i32, x as i32),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows, start, goal)
    }

    /// Build a map from a flat row-major buffer.
    pub fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<Cell>,
        start: Point,
        goal: Point,
    ) -> Result<Self, MazeError> {
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let expected = Self::area(height, width)?;
        if cells.len() != expected {
            return Err(MazeError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        let too_large = || MazeError::TooLarge { height, width };
        let map = Self {
            cells,
            height: i32::try_from(height).map_err(|_| too_large())?,
            width: i32::try_from(width).map_err(|_| too_large())?,
            start,
            goal,
        };
        map.check_endpoint(Endpoint::Start, start)?;
        map.check_endpoint(Endpoint::Goal, goal)?;
        Ok(map)
    }

    /// Number of cells in a `height` by `width` grid, or
    /// [`MazeError::TooLarge`] if it cannot be addressed with `i32`
    /// coordinates.
    pub fn area(height: usize, width: usize) -> Result<usize, MazeError> {
        let fits = |n: usize| i32::try_from(n).is_ok();
        match height.checked_mul(width) {
            Some(n) if fits(height) && fits(width) => Ok(n),
            _ => Err(MazeError::TooLarge { height, width }),
        }
    }

    /// Return the same maze searched between different endpoints.
    pub fn with_endpoints(mut self, start: Point, goal: Point) -> Result<Self, MazeError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)?;
        self.start = start;
        self.goal = goal;
        Ok(self)
    }

    fn check_endpoint(&self, endpoint: Endpoint, pos: Point) -> Result<(), MazeError> {
        match self.at(pos) {
            None => Err(MazeError::EndpointOutOfBounds { endpoint, pos }),
            Some(Cell::Wall) => Err(MazeError::EndpointOnWall { endpoint, pos }),
            Some(Cell::Road) => Ok(()),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: empty maps are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.y >= 0 && p.x >= 0 && p.y < self.height && p.x < self.width
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx / w) as i32, (idx % w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_road(&self, p: Point) -> bool {
        self.at(p) == Some(Cell::Road)
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.point(i), c))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }
}
