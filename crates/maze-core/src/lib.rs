//! **maze-core**: core types for grid maze pathfinding.
//!
//! This crate provides the foundational types used across the workspace:
//! `(y, x)` geometry primitives, road/wall cells, the validated immutable
//! [`GridMap`], ASCII [`layout`]s and random maze generation.

pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod mapgen;

pub use error::{Endpoint, ErrorKind, MazeError};
pub use geom::{Direction, Point};
pub use grid::{Cell, GridMap};
pub use layout::LayoutError;
pub use mapgen::MapGen;
