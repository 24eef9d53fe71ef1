//! A rectangular maze of wall and open cells.
//!
//! [`Maze`] is the stock grid provider for searches: it knows its extents,
//! which cells are walls, and which step directions movement may use.
//! Mazes can be built empty, with a wall border, parsed from ASCII art, or
//! roughened with randomly scattered walls.

use crate::geom::{CARDINAL, Location, Range};
use rand::{Rng, RngExt};
use std::fmt;

/// Character used for walls in ASCII maps.
pub const WALL_CHAR: char = '#';
/// Character used for open cells in ASCII maps.
pub const OPEN_CHAR: char = '.';

/// A rectangular grid of wall/open cells with an ordered direction set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<bool>,
    width: i32,
    depth: i32,
    directions: Vec<Location>,
}

impl Maze {
    /// Create a fully open maze using the cardinal direction set.
    pub fn new(width: i32, depth: i32) -> Self {
        let width = width.max(0);
        let depth = depth.max(0);
        Self {
            walls: vec![false; Range::sized(width, depth).len()],
            width,
            depth,
            directions: CARDINAL.to_vec(),
        }
    }

    /// Create a maze whose outermost ring of cells is wall.
    pub fn bordered(width: i32, depth: i32) -> Self {
        let mut m = Self::new(width, depth);
        let interior = m.interior();
        for loc in m.bounds() {
            if !interior.contains(loc) {
                m.set_wall(loc, true);
            }
        }
        m
    }

    /// Parse a maze from ASCII art: `#` is wall, `.` is open.
    ///
    /// Leading/trailing whitespace of the whole string is trimmed. Each line
    /// becomes one `z` row, starting at `z = 0`, and all lines must have
    /// the same width.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MazeError::Empty);
        }
        let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
        let width = lines[0].chars().count() as i32;
        let depth = lines.len() as i32;
        let mut m = Self::new(width, depth);
        for (z, line) in lines.iter().enumerate() {
            let z = z as i32;
            let w = line.chars().count() as i32;
            if w != width {
                return Err(MazeError::InconsistentWidth {
                    line: z,
                    expected: width,
                    found: w,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let loc = Location::new(x as i32, z);
                match ch {
                    WALL_CHAR => m.set_wall(loc, true),
                    OPEN_CHAR => {}
                    _ => return Err(MazeError::InvalidChar { ch, loc }),
                }
            }
        }
        Ok(m)
    }

    /// Replace the step direction set. Order is preserved and matters:
    /// neighbours are discovered in this order.
    pub fn with_directions(mut self, dirs: &[Location]) -> Self {
        self.directions = dirs.to_vec();
        self
    }

    /// Grid extent along x.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid extent along z.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// The ordered step directions.
    pub fn directions(&self) -> &[Location] {
        &self.directions
    }

    /// The full addressable range `[0, width) x [0, depth)`.
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.depth)
    }

    /// The interior range, excluding the one-cell border ring.
    pub fn interior(&self) -> Range {
        self.bounds().shift(1, 1, -1, -1)
    }

    fn index(&self, loc: Location) -> Option<usize> {
        if !loc.in_range(&self.bounds()) {
            return None;
        }
        Some(flat_index(self.width, loc))
    }

    /// Whether `loc` is a wall. Locations outside the maze read as wall.
    pub fn is_wall(&self, loc: Location) -> bool {
        self.index(loc).is_none_or(|i| self.walls[i])
    }

    /// Set or clear a wall. Out-of-bounds writes are ignored.
    pub fn set_wall(&mut self, loc: Location, wall: bool) {
        if let Some(i) = self.index(loc) {
            self.walls[i] = wall;
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Interior cells that are not walls, in row-major order.
    pub fn open_cells(&self) -> Vec<Location> {
        self.interior()
            .iter()
            .filter(|&loc| !self.is_wall(loc))
            .collect()
    }

    /// Turn roughly `fraction` (0.0–1.0) of the interior cells into walls.
    ///
    /// Returns the number of cells that changed from open to wall.
    pub fn scatter_walls(&mut self, rng: &mut impl Rng, fraction: f64) -> usize {
        let interior = self.interior();
        let fraction = fraction.clamp(0.0, 1.0);
        let mut placed = 0;
        for loc in interior {
            if rng.random_bool(fraction) && !self.is_wall(loc) {
                self.set_wall(loc, true);
                placed += 1;
            }
        }
        placed
    }

    /// Pick two distinct open interior cells at random, as `(start, goal)`.
    ///
    /// Returns `None` if fewer than two open cells exist.
    pub fn random_endpoints(&self, rng: &mut impl Rng) -> Option<(Location, Location)> {
        let mut cells = self.open_cells();
        if cells.len() < 2 {
            return None;
        }
        let start = cells.swap_remove(rng.random_range(0..cells.len()));
        let goal = cells[rng.random_range(0..cells.len())];
        Some((start, goal))
    }
}

/// Row-major offset of an in-bounds `loc`, computed in `usize` so large
/// grids do not overflow `i32`.
#[inline]
fn flat_index(width: i32, loc: Location) -> usize {
    loc.z as usize * width as usize + loc.x as usize
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.depth {
            for x in 0..self.width {
                let ch = if self.is_wall(Location::new(x, z)) {
                    WALL_CHAR
                } else {
                    OPEN_CHAR
                };
                write!(f, "{ch}")?;
            }
            if z + 1 < self.depth {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The input contained no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character other than a wall or open marker was found.
    InvalidChar { ch: char, loc: Location },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty input"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, loc } => {
                write!(f, "maze contains invalid character \u{201c}{ch}\u{201d} at {loc}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
