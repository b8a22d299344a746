//! The batch maze file format.
//!
//! ```text
//! 2            <- number of mazes
//!              <- separator line (ignored)
//! 3 4          <- height width
//! 0,0,1,0      <- rows: 0 road, 1 wall
//! 1,0,0,0
//! 0,1,1,0
//!
//! 1 1
//! 0
//! ```
//!
//! Every maze is searched from its top-left to its bottom-right corner.
//! Results are written per maze as one `y x` line per explored cell, the
//! path as `(y, x)` tuples on a single line, and a blank line.

use std::fmt;
use std::io::{self, Write};

use maze_core::{Cell, GridMap, MazeError, Point};
use maze_paths::SearchOutcome;

/// Upper bound on cells reserved before a maze's rows have been read.
const MAX_PREALLOC: usize = 1 << 16;

/// One maze read from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeCase {
    /// 1-based line number of the maze's dimension line.
    pub line: usize,
    pub grid: GridMap,
}

/// Why a batch file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The file ended before all announced mazes were read.
    UnexpectedEof,
    /// The maze count is not a non-negative integer.
    BadCount(String),
    /// The dimension line is not two positive integers.
    BadDimensions(String),
    /// A row entry is not an integer.
    BadCell(String),
    /// A row has the wrong number of entries.
    RowWidth { expected: usize, found: usize },
    /// The maze itself is invalid (unknown cell code, walled corner, ...).
    Maze(MazeError),
}

/// A batch file error at a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::UnexpectedEof => f.write_str("unexpected end of file"),
            ParseErrorKind::BadCount(s) => write!(f, "invalid maze count {s:?}"),
            ParseErrorKind::BadDimensions(s) => write!(f, "invalid dimensions {s:?}"),
            ParseErrorKind::BadCell(s) => write!(f, "invalid cell {s:?}"),
            ParseErrorKind::RowWidth { expected, found } => {
                write!(f, "row has {found} cells, expected {expected}")
            }
            ParseErrorKind::Maze(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Maze(e) => Some(e),
            _ => None,
        }
    }
}

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn next(&mut self) -> Result<&'a str, ParseError> {
        match self.inner.next() {
            Some((i, s)) => {
                self.line = i + 1;
                Ok(s.trim())
            }
            None => Err(self.error(ParseErrorKind::UnexpectedEof)),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            kind,
        }
    }
}

/// Parse a whole batch file.
pub fn parse(input: &str) -> Result<Vec<MazeCase>, ParseError> {
    let mut lines = Lines {
        inner: input.lines().enumerate(),
        line: 0,
    };

    let count_line = lines.next()?;
    let count: usize = count_line
        .parse()
        .map_err(|_| lines.error(ParseErrorKind::BadCount(count_line.to_string())))?;

    // The count is untrusted: grow as mazes are actually read.
    let mut cases = Vec::new();
    for _ in 0..count {
        lines.next()?; // separator
        cases.push(parse_case(&mut lines)?);
    }
    Ok(cases)
}

fn parse_case(lines: &mut Lines<'_>) -> Result<MazeCase, ParseError> {
    let dims = lines.next()?;
    let line = lines.line;
    let bad_dims = || ParseError {
        line,
        kind: ParseErrorKind::BadDimensions(dims.to_string()),
    };
    let mut it = dims.split_whitespace().map(str::parse::<usize>);
    let (height, width) = match (it.next(), it.next(), it.next()) {
        (Some(Ok(h)), Some(Ok(w)), None) if h > 0 && w > 0 => (h, w),
        _ => return Err(bad_dims()),
    };

    let area = GridMap::area(height, width).map_err(|_| bad_dims())?;
    let mut cells = Vec::with_capacity(area.min(MAX_PREALLOC));
    for y in 0..height {
        let row = lines.next()?;
        let entries: Vec<&str> = row.split(',').map(str::trim).collect();
        if entries.len() != width {
            return Err(lines.error(ParseErrorKind::RowWidth {
                expected: width,
                found: entries.len(),
            }));
        }
        for (x, entry) in entries.into_iter().enumerate() {
            let code: i32 = entry
                .parse()
                .map_err(|_| lines.error(ParseErrorKind::BadCell(entry.to_string())))?;
            let pos = Point::new(y as i32, x as i32);
            let cell = Cell::from_code(code)
                .ok_or_else(|| lines.error(ParseErrorKind::Maze(MazeError::UnknownCell { code, pos })))?;
            cells.push(cell);
        }
    }

    let goal = Point::new(height as i32 - 1, width as i32 - 1);
    let grid = GridMap::from_cells(height, width, cells, Point::ZERO, goal).map_err(|e| ParseError {
        line,
        kind: ParseErrorKind::Maze(e),
    })?;
    Ok(MazeCase { line, grid })
}

/// Write one maze's result in the batch output format.
pub fn write_outcome<W: Write>(w: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    for p in outcome.explored() {
        writeln!(w, "{} {}", p.y, p.x)?;
    }
    for p in outcome.path() {
        write!(w, "{p}")?;
    }
    write!(w, "\n\n")
}

/// Write mazes in the batch input format.
pub fn write_mazes<W: Write>(w: &mut W, grids: &[GridMap]) -> io::Result<()> {
    writeln!(w, "{}", grids.len())?;
    for grid in grids {
        writeln!(w)?;
        writeln!(w, "{} {}", grid.height(), grid.width())?;
        for row in grid.rows() {
            let codes: Vec<String> = row.iter().map(|c| c.code().to_string()).collect();
            writeln!(w, "{}", codes.join(","))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_paths::{Strategy, search};

    const INPUT: &str = "2

3 3
0,1,0
0,1,0
0,0,0

1 1
0
";

    #[test]
    fn parses_cases() {
        let cases = parse(INPUT).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].line, 3);
        assert_eq!(cases[0].grid.height(), 3);
        assert_eq!(cases[0].grid.goal(), Point::new(2, 2));
        assert_eq!(cases[0].grid.at(Point::new(1, 1)), Some(Cell::Wall));
        assert_eq!(cases[1].line, 8);
        assert_eq!(cases[1].grid.len(), 1);
    }

    #[test]
    fn writes_explored_then_path() {
        let cases = parse(INPUT).unwrap();
        let mut out = Vec::new();
        for case in &cases {
            write_outcome(&mut out, &search(&case.grid, Strategy::BreadthFirst)).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "0 0\n1 0\n2 0\n2 1\n2 2\n(0, 0)(1, 0)(2, 0)(2, 1)(2, 2)\n\n0 0\n(0, 0)\n\n"
        );
    }

    #[test]
    fn not_found_writes_empty_path_line() {
        let cases = parse("1\n\n2 2\n0,1\n1,0\n").unwrap();
        let mut out = Vec::new();
        write_outcome(&mut out, &search(&cases[0].grid, Strategy::default())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0\n\n\n");
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse("1\n\n2 2\n0,0\n0,x\n").unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.kind, ParseErrorKind::BadCell("x".into()));

        let err = parse("1\n\n2 2\n0,0\n0\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::RowWidth {
                expected: 2,
                found: 1
            }
        );

        let err = parse("2\n\n1 1\n0\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);

        let err = parse("1\n\n0 3\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::BadDimensions(_)));

        assert!(matches!(parse("two").unwrap_err().kind, ParseErrorKind::BadCount(_)));
    }

    #[test]
    fn oversized_headers_are_errors() {
        let err = parse(&format!("{}\n", usize::MAX)).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);

        let err = parse("1\n\n100000000000 100000000000\n0\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::BadDimensions(_)));

        // The area fits a usize but the height is no valid row index.
        let err = parse("1\n\n3000000000 1\n0\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::BadDimensions(_)));

        // A plausible header is only checked against the rows that follow.
        let err = parse("1\n\n5000 5000\n0\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::RowWidth { expected: 5000, found: 1 }));
    }

    #[test]
    fn unknown_code_reports_its_cell() {
        let err = parse("1\n\n2 3\n0,0,0\n0,2,0\n").unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(
            err.kind,
            ParseErrorKind::Maze(MazeError::UnknownCell {
                code: 2,
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn walled_corner_is_a_maze_error() {
        let err = parse("1\n\n1 2\n1,0\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(
            err.kind,
            ParseErrorKind::Maze(MazeError::EndpointOnWall { .. })
        ));
    }

    #[test]
    fn written_mazes_parse_back() {
        let cases = parse(INPUT).unwrap();
        let grids: Vec<GridMap> = cases.into_iter().map(|c| c.grid).collect();
        let mut out = Vec::new();
        write_mazes(&mut out, &grids).unwrap();
        let text = String::from_utf8(out).unwrap();
        let back: Vec<GridMap> = parse(&text).unwrap().into_iter().map(|c| c.grid).collect();
        assert_eq!(back, grids);
    }
}
