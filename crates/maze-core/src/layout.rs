//! Mazes written as ASCII art.
//!
//! A layout uses one character per cell: `#` wall, `.` road, `S` the start
//! and `G` the goal (both roads). Lines are separated by `'\n'` and must all
//! have the same width. Leading and trailing whitespace of the whole string
//! is trimmed, and so is indentation of each line, so layouts can be written
//! inline in source code.

use std::fmt;

use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::{Cell, GridMap};

pub const WALL: char = '#';
pub const ROAD: char = '.';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Parse an ASCII layout into a [`GridMap`].
pub fn parse(s: &str) -> Result<GridMap, LayoutError> {
    let mut rows = Vec::new();
    let mut start = None;
    let mut goal = None;

    for (y, line) in s.trim().lines().map(str::trim).enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            let pos = Point::new(y as i32, x as i32);
            let cell = match ch {
                WALL => Cell::Wall,
                ROAD => Cell::Road,
                START => {
                    if start.replace(pos).is_some() {
                        return Err(LayoutError::Duplicate { ch, pos });
                    }
                    Cell::Road
                }
                GOAL => {
                    if goal.replace(pos).is_some() {
                        return Err(LayoutError::Duplicate { ch, pos });
                    }
                    Cell::Road
                }
                _ => return Err(LayoutError::InvalidChar { ch, pos }),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    let start = start.ok_or(LayoutError::Missing(START))?;
    let goal = goal.ok_or(LayoutError::Missing(GOAL))?;
    Ok(GridMap::new(rows, start, goal)?)
}

impl GridMap {
    /// Render the map as an ASCII layout (inverse of [`parse`]).
    pub fn to_layout(&self) -> String {
        self.render(|_| None)
    }

    /// Render the map, letting `mark` override the character of any cell.
    /// Start and goal markers always win.
    pub fn render(&self, mark: impl Fn(Point) -> Option<char>) -> String {
        let mut out = String::with_capacity(self.len() + self.height() as usize);
        for (p, cell) in self.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            let ch = if p == self.start() {
                START
            } else if p == self.goal() {
                GOAL
            } else if let Some(ch) = mark(p) {
                ch
            } else {
                match cell {
                    Cell::Road => ROAD,
                    Cell::Wall => WALL,
                }
            };
            out.push(ch);
        }
        out
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A character other than `#`, `.`, `S` or `G`.
    InvalidChar { ch: char, pos: Point },
    /// A second `S` or `G` marker.
    Duplicate { ch: char, pos: Point },
    /// No `S` or no `G` marker.
    Missing(char),
    /// The resulting grid is not a valid maze (e.g. ragged rows).
    Maze(MazeError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout: invalid character {ch:?} at {pos}")
            }
            Self::Duplicate { ch, pos } => write!(f, "layout: duplicate {ch} at {pos}"),
            Self::Missing(ch) => write!(f, "layout: missing {ch}"),
            Self::Maze(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for LayoutError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        S.#.
        ..#.
        ...G";

    #[test]
    fn parse_and_size() {
        let g = parse(ROOM).unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.goal(), Point::new(2, 3));
        assert_eq!(g.count(Cell::Wall), 2);
    }

    #[test]
    fn render_round_trips() {
        let g = parse(ROOM).unwrap();
        assert_eq!(g.to_layout(), "S.#.\n..#.\n...G");
        assert_eq!(parse(&g.to_layout()).unwrap(), g);
    }

    #[test]
    fn render_with_marks() {
        let g = parse("S..G").unwrap();
        let s = g.render(|p| (p.x == 1).then_some('*'));
        assert_eq!(s, "S*.G");
    }

    #[test]
    fn invalid_char() {
        let err = parse("S.x\n..G").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidChar {
                ch: 'x',
                pos: Point::new(0, 2)
            }
        );
        assert_eq!(err.to_string(), "layout: invalid character 'x' at (0, 2)");
    }

    #[test]
    fn missing_and_duplicate_markers() {
        assert_eq!(parse("S..").unwrap_err(), LayoutError::Missing('G'));
        assert_eq!(
            parse("S.S\n..G").unwrap_err(),
            LayoutError::Duplicate {
                ch: 'S',
                pos: Point::new(0, 2)
            }
        );
    }

    #[test]
    fn inconsistent_width() {
        let err = parse("S..\n.G").unwrap_err();
        assert!(matches!(err, LayoutError::Maze(MazeError::RaggedRow { row: 1, .. })));
    }
}
