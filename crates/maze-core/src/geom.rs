//! Geometry primitives: [`Point`] and [`Direction`].
//!
//! Coordinates are `(y, x)`: `y` is the row (grows down) and `x` is the
//! column (grows right), matching the order mazes are written in.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer cell coordinate, `y` first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { y: 0, x: 0 };

    /// Create a new point from a row and a column.
    #[inline]
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// The neighbouring coordinate one step in `dir`. May lie outside any
    /// particular grid.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub const fn is_adjacent(self, other: Point) -> bool {
        (self.y - other.y).unsigned_abs() + (self.x - other.x).unsigned_abs() == 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((y, x): (i32, i32)) -> Self {
        Self::new(y, x)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.y - rhs.y, self.x - rhs.x)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in expansion order: left, right, up, down.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset of this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Left => Point::new(0, -1),
            Direction::Right => Point::new(0, 1),
            Direction::Up => Point::new(-1, 0),
            Direction::Down => Point::new(1, 0),
        }
    }
}
