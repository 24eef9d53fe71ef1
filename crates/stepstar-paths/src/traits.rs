use stepstar_core::{Location, Maze};

/// Read-only view of a rectangular grid, consumed by the search.
///
/// Implementations need not guard against out-of-range queries: the search
/// checks `[0, width) x [0, depth)` before calling [`is_blocked`].
///
/// [`is_blocked`]: GridAdapter::is_blocked
pub trait GridAdapter {
    /// Whether the cell is impassable.
    fn is_blocked(&self, loc: Location) -> bool;

    /// Grid extent along x.
    fn width(&self) -> i32;

    /// Grid extent along z.
    fn depth(&self) -> i32;

    /// Neighbour step offsets, in the order neighbours are discovered.
    /// Tie-breaking between equally good nodes depends on this order.
    fn directions(&self) -> &[Location];
}

impl GridAdapter for Maze {
    fn is_blocked(&self, loc: Location) -> bool {
        self.is_wall(loc)
    }

    fn width(&self) -> i32 {
        Maze::width(self)
    }

    fn depth(&self) -> i32 {
        Maze::depth(self)
    }

    fn directions(&self) -> &[Location] {
        Maze::directions(self)
    }
}

impl<G: GridAdapter + ?Sized> GridAdapter for &G {
    fn is_blocked(&self, loc: Location) -> bool {
        (**self).is_blocked(loc)
    }

    fn width(&self) -> i32 {
        (**self).width()
    }

    fn depth(&self) -> i32 {
        (**self).depth()
    }

    fn directions(&self) -> &[Location] {
        (**self).directions()
    }
}
