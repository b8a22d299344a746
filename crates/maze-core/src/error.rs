//! Errors raised while building a [`GridMap`](crate::GridMap).

use std::fmt;

use crate::geom::Point;

/// Which end of the search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Broad category of a [`MazeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed grid or unusable start/goal coordinates.
    InvalidInput,
}

/// Errors that can occur when constructing a maze.
///
/// Every variant is an [`ErrorKind::InvalidInput`]: nothing here is
/// recoverable by retrying with the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// `height * width` overflows, or a side does not fit an `i32`
    /// coordinate.
    TooLarge { height: usize, width: usize },
    /// A flat cell buffer does not match `height * width`.
    CellCount { expected: usize, found: usize },
    /// A numeric cell code other than 0 (road) or 1 (wall).
    UnknownCell { code: i32, pos: Point },
    /// Start or goal lies outside the grid.
    EndpointOutOfBounds { endpoint: Endpoint, pos: Point },
    /// Start or goal lies on a wall.
    EndpointOnWall { endpoint: Endpoint, pos: Point },
}

impl MazeError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("maze: grid is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { height, width } => {
                write!(f, "maze: {height}x{width} grid is too large")
            }
            Self::CellCount { expected, found } => {
                write!(f, "maze: got {found} cells, expected {expected}")
            }
            Self::UnknownCell { code, pos } => {
                write!(f, "maze: unknown cell code {code} at {pos}")
            }
            Self::EndpointOutOfBounds { endpoint, pos } => {
                write!(f, "maze: {endpoint} {pos} is out of bounds")
            }
            Self::EndpointOnWall { endpoint, pos } => {
                write!(f, "maze: {endpoint} {pos} is a wall")
            }
        }
    }
}

impl std::error::Error for MazeError {}
