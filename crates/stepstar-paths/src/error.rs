use std::fmt;

use stepstar_core::Location;

/// Errors reported by [`AStarSearch`](crate::AStarSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `step` or path reconstruction was called before `initialize`.
    NotInitialized,
    /// The open set ran out before the goal was reached.
    NoPathFound,
    /// A location outside the grid, or one the search has never seen.
    InvalidLocation(Location),
    /// Following parent links from `from` did not reach the start node.
    BrokenParentChain { from: Location },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "search: not initialized"),
            Self::NoPathFound => write!(f, "search: no path to goal"),
            Self::InvalidLocation(loc) => write!(f, "search: invalid location {loc}"),
            Self::BrokenParentChain { from } => {
                write!(f, "search: parent chain from {from} does not reach the start")
            }
        }
    }
}

impl std::error::Error for SearchError {}
