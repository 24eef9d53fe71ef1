//! Geometry primitives: [`Location`], [`Range`] and the standard step
//! direction sets.
//!
//! Grids are addressed on the ground plane, so the second axis is `z`
//! rather than `y`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// An integer grid cell. X grows right, Z grows "forward".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub z: i32,
}

impl Location {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a location shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Whether the location is inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl Add for Location {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Location {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Direction sets
// ---------------------------------------------------------------------------

/// Axis-aligned unit steps: east, north, west, south.
pub const CARDINAL: [Location; 4] = [
    Location::new(1, 0),
    Location::new(0, 1),
    Location::new(-1, 0),
    Location::new(0, -1),
];

/// Cardinal steps followed by the four diagonals.
pub const ALL: [Location; 8] = [
    Location::new(1, 0),
    Location::new(0, 1),
    Location::new(-1, 0),
    Location::new(0, -1),
    Location::new(1, 1),
    Location::new(-1, 1),
    Location::new(-1, -1),
    Location::new(1, -1),
];

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Location,
    pub max: Location,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, z0: i32, x1: i32, z1: i32) -> Self {
        Self {
            min: Location::new(x0.min(x1), z0.min(z1)),
            max: Location::new(x0.max(x1), z0.max(z1)),
        }
    }

    /// Range `[0, width) x [0, depth)`.
    #[inline]
    pub fn sized(width: i32, depth: i32) -> Self {
        Self::new(0, 0, width.max(0), depth.max(0))
    }

    /// Width of the range (x extent).
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Depth of the range (z extent).
    #[inline]
    pub fn depth(self) -> i32 {
        self.max.z - self.min.z
    }

    /// Return a range with its corners shifted by the given deltas.
    ///
    /// Collapses to the zero range if the result would be empty.
    #[inline]
    pub fn shift(self, dx0: i32, dz0: i32, dx1: i32, dz1: i32) -> Self {
        let r = Self {
            min: self.min.shift(dx0, dz0),
            max: self.max.shift(dx1, dz1),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.depth() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.z >= self.max.z
    }

    /// Whether `loc` is inside the half-open range.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        loc.x >= self.min.x && loc.x < self.max.x && loc.z >= self.min.z && loc.z < self.max.z
    }

    /// Row-major iterator over every location in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Location;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the locations in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Location,
}

impl Iterator for RangeIter {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        if self.cur.z >= self.range.max.z || self.range.is_empty() {
            return None;
        }
        let loc = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.z += 1;
        }
        Some(loc)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.z >= self.range.max.z {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.z - self.cur.z - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn location_round_trip() {
        let loc = Location::new(3, -7);
        let json = serde_json::to_string(&loc).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
