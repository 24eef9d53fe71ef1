use stepstar_core::Location;

use crate::error::SearchError;
use crate::search::AStarSearch;
use crate::traits::GridAdapter;

impl<G: GridAdapter> AStarSearch<G> {
    /// Walk parent links from `from` back to the start node.
    ///
    /// The result starts with `from` and always ends with the start
    /// location. `from` may be any open or closed node, so this works
    /// mid-search as well as after the goal is reached. The walk is bounded
    /// by the number of known nodes; a chain that does not reach the start
    /// within that bound is reported as [`SearchError::BrokenParentChain`].
    pub fn reconstruct_path(&self, from: Location) -> Result<Vec<Location>, SearchError> {
        let start = self.start().ok_or(SearchError::NotInitialized)?;
        let mut node = self.node(from).ok_or(SearchError::InvalidLocation(from))?;
        let limit = self.known_len();
        let broken = SearchError::BrokenParentChain { from };

        let mut path = Vec::new();
        loop {
            path.push(node.location);
            if node.location == start {
                return Ok(path);
            }
            if path.len() >= limit {
                return Err(broken);
            }
            node = node
                .parent
                .and_then(|p| self.node(p))
                .ok_or(broken)?;
        }
    }

    /// Path from the current frontier node back to the start.
    pub fn current_path(&self) -> Result<Vec<Location>, SearchError> {
        let frontier = self
            .current_frontier()
            .ok_or(SearchError::NotInitialized)?;
        self.reconstruct_path(frontier.location)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AStarSearch, SearchError, SearchNode, StepOutcome};
    use stepstar_core::{Location, Maze};

    #[test]
    fn reconstruct_before_initialize() {
        let maze = Maze::new(3, 3);
        let s = AStarSearch::new(&maze);
        assert_eq!(
            s.reconstruct_path(Location::new(1, 1)),
            Err(SearchError::NotInitialized)
        );
        assert_eq!(s.current_path(), Err(SearchError::NotInitialized));
    }

    #[test]
    fn reconstruct_unknown_location() {
        let maze = Maze::new(3, 3);
        let mut s = AStarSearch::new(&maze);
        s.initialize(Location::new(0, 0), Location::new(2, 2)).unwrap();
        assert_eq!(
            s.reconstruct_path(Location::new(2, 2)),
            Err(SearchError::InvalidLocation(Location::new(2, 2)))
        );
    }

    #[test]
    fn reconstruct_mid_search_from_open_node() {
        let maze = Maze::new(5, 2);
        let mut s = AStarSearch::new(&maze);
        s.initialize(Location::new(0, 0), Location::new(4, 0)).unwrap();
        for _ in 0..3 {
            s.step().unwrap();
        }
        // (1, 1) was opened while expanding the closed (1, 0).
        assert!(s.is_open(Location::new(1, 1)));
        assert_eq!(
            s.reconstruct_path(Location::new(1, 1)).unwrap(),
            vec![Location::new(1, 1), Location::new(1, 0), Location::new(0, 0)]
        );
    }

    #[test]
    fn start_equals_goal_yields_single_location() {
        let maze = Maze::new(4, 4);
        let mut s = AStarSearch::new(&maze);
        let here = Location::new(2, 1);
        s.initialize(here, here).unwrap();
        assert_eq!(s.step(), Ok(StepOutcome::Done));
        assert_eq!(s.current_path().unwrap(), vec![here]);
    }

    #[test]
    fn parent_cycle_is_reported() {
        let maze = Maze::new(4, 1);
        let mut s = AStarSearch::new(&maze);
        s.initialize(Location::new(0, 0), Location::new(3, 0)).unwrap();
        let (a, b) = (Location::new(1, 0), Location::new(2, 0));
        s.open.insert(a, SearchNode::reached(a, 1.0, 2.0, b));
        s.open.insert(b, SearchNode::reached(b, 2.0, 1.0, a));
        assert_eq!(
            s.reconstruct_path(a),
            Err(SearchError::BrokenParentChain { from: a })
        );
    }

    #[test]
    fn dangling_parent_is_reported() {
        let maze = Maze::new(4, 1);
        let mut s = AStarSearch::new(&maze);
        s.initialize(Location::new(0, 0), Location::new(3, 0)).unwrap();
        let a = Location::new(2, 0);
        s.open.insert(a, SearchNode::reached(a, 2.0, 1.0, Location::new(1, 0)));
        assert_eq!(
            s.reconstruct_path(a),
            Err(SearchError::BrokenParentChain { from: a })
        );
    }
}
