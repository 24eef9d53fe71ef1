//! **stepstar-core**: grid geometry and maze types.
//!
//! This crate provides the foundational types shared by the stepstar
//! crates: integer grid locations, half-open ranges, the standard step
//! direction sets, and [`Maze`], a simple wall/open grid provider.

pub mod geom;
pub mod maze;

pub use geom::{ALL, CARDINAL, Location, Range};
pub use maze::{Maze, MazeError};
