use indexmap::IndexMap;
use stepstar_core::{Location, Range};

use crate::config::{Rediscovery, SearchConfig};
use crate::distance::euclidean;
use crate::error::SearchError;
use crate::node::SearchNode;
use crate::observe::{Discovery, Evaluation, NoopObserver, StepObserver};
use crate::traits::GridAdapter;

/// Lifecycle of an [`AStarSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No start/goal bound yet.
    Idle,
    /// Initialized; `step` makes progress.
    Searching,
    /// The goal was reached.
    Done,
    /// The open set emptied without reaching the goal.
    NoPath,
}

/// Result of a single [`AStarSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continuing,
    Done,
    NoPathFound,
}

/// Incremental A* search over a [`GridAdapter`].
///
/// Each call to [`step`](Self::step) performs one bounded expansion: the
/// current frontier node's neighbours are evaluated into the open set, and
/// the open node with the lowest `(f, h)` is moved to the closed set and
/// becomes the next frontier. Ties beyond `(f, h)` go to the node that was
/// discovered first.
///
/// Open and closed sets are keyed by [`Location`], so a cell is present at
/// most once regardless of its current cost estimate. Parent links are
/// stored as locations and resolved through the sets.
pub struct AStarSearch<G: GridAdapter> {
    grid: G,
    config: SearchConfig,
    state: SearchState,
    endpoints: Option<(Location, Location)>,
    pub(crate) open: IndexMap<Location, SearchNode>,
    pub(crate) closed: IndexMap<Location, SearchNode>,
    frontier: Option<Location>,
    expansions: usize,
}

impl<G: GridAdapter> AStarSearch<G> {
    /// Create an idle search over `grid` with the default config.
    pub fn new(grid: G) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    /// Create an idle search over `grid`.
    pub fn with_config(grid: G, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            state: SearchState::Idle,
            endpoints: None,
            open: IndexMap::new(),
            closed: IndexMap::new(),
            frontier: None,
            expansions: 0,
        }
    }

    /// Bind a new start and goal, discarding any search in progress.
    ///
    /// The start node enters the open set with zero costs and becomes the
    /// frontier. Fails with [`SearchError::InvalidLocation`] if either
    /// endpoint lies outside the grid; the previous search is then left
    /// untouched.
    pub fn initialize(&mut self, start: Location, goal: Location) -> Result<(), SearchError> {
        for loc in [start, goal] {
            if !self.in_bounds(loc) {
                return Err(SearchError::InvalidLocation(loc));
            }
        }

        self.open.clear();
        self.closed.clear();
        self.open.insert(start, SearchNode::start(start));
        self.endpoints = Some((start, goal));
        self.frontier = Some(start);
        self.expansions = 0;
        self.state = SearchState::Searching;
        log::debug!("search initialized: {start} -> {goal}");
        Ok(())
    }

    /// Expand the current frontier node.
    pub fn step(&mut self) -> Result<StepOutcome, SearchError> {
        self.step_with(&mut NoopObserver)
    }

    /// Expand the current frontier node, reporting to `observer`.
    pub fn step_with(&mut self, observer: &mut impl StepObserver) -> Result<StepOutcome, SearchError> {
        self.step_from(self.frontier, observer)
    }

    /// Expand an explicit node.
    ///
    /// `current` must be a location already in the open or closed set.
    /// `None`, or the goal itself, ends the search as `Done` without
    /// touching either set. Once finished, further calls return the same
    /// outcome and change nothing.
    pub fn step_from(
        &mut self,
        current: Option<Location>,
        observer: &mut impl StepObserver,
    ) -> Result<StepOutcome, SearchError> {
        let goal = match (self.state, self.endpoints) {
            (SearchState::Idle, _) | (_, None) => return Err(SearchError::NotInitialized),
            (SearchState::Done, _) => return Ok(StepOutcome::Done),
            (SearchState::NoPath, _) => return Ok(StepOutcome::NoPathFound),
            (SearchState::Searching, Some((_, goal))) => goal,
        };

        let Some(current) = current else {
            return Ok(self.finish(SearchState::Done));
        };
        if current == goal {
            return Ok(self.finish(SearchState::Done));
        }
        let current = *self
            .node(current)
            .ok_or(SearchError::InvalidLocation(current))?;

        self.expand(&current, goal, observer);
        Ok(self.close_best(goal, observer))
    }

    /// Evaluate every in-bounds, unblocked, not-yet-closed neighbour of
    /// `current` into the open set.
    fn expand(&mut self, current: &SearchNode, goal: Location, observer: &mut impl StepObserver) {
        let bounds = Range::sized(self.grid.width(), self.grid.depth());
        for &dir in self.grid.directions() {
            let neighbour = current.location + dir;
            if !bounds.contains(neighbour)
                || self.grid.is_blocked(neighbour)
                || self.closed.contains_key(&neighbour)
            {
                continue;
            }

            let g = euclidean(current.location, neighbour) + current.g;
            let h = euclidean(neighbour, goal);
            let node = SearchNode::reached(neighbour, g, h, current.location);

            let discovery = match self.open.get_mut(&neighbour) {
                Some(existing) => match self.config.rediscovery {
                    Rediscovery::IfBetter if g >= existing.g => Discovery::Kept,
                    _ => {
                        *existing = node;
                        Discovery::Overwritten
                    }
                },
                None => {
                    self.open.insert(neighbour, node);
                    Discovery::New
                }
            };

            log::trace!(
                "evaluated {neighbour}: g={g:.2} h={h:.2} f={:.2} ({discovery:?})",
                node.f()
            );
            observer.evaluated(&Evaluation { node, discovery });
        }
    }

    /// Move the best open node to the closed set and make it the frontier.
    fn close_best(&mut self, goal: Location, observer: &mut impl StepObserver) -> StepOutcome {
        let best = self
            .open
            .values()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.priority_cmp(b))
            .map(|(i, _)| i);
        let Some((loc, node)) = best.and_then(|i| self.open.shift_remove_index(i)) else {
            return self.finish(SearchState::NoPath);
        };

        self.closed.insert(loc, node);
        self.frontier = Some(loc);
        self.expansions += 1;
        log::trace!("closed {loc}: f={:.2}", node.f());
        observer.closed(&node);

        if loc == goal {
            return self.finish(SearchState::Done);
        }
        StepOutcome::Continuing
    }

    fn finish(&mut self, state: SearchState) -> StepOutcome {
        self.state = state;
        match state {
            SearchState::NoPath => {
                log::debug!("search exhausted after {} expansions", self.expansions);
                StepOutcome::NoPathFound
            }
            _ => {
                log::debug!("search done after {} expansions", self.expansions);
                StepOutcome::Done
            }
        }
    }

    /// Step until the search finishes, then return the path from the goal
    /// back to the start.
    pub fn run_to_completion(&mut self) -> Result<Vec<Location>, SearchError> {
        loop {
            match self.step()? {
                StepOutcome::Continuing => continue,
                StepOutcome::Done => return self.current_path(),
                StepOutcome::NoPathFound => return Err(SearchError::NoPathFound),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether `loc` is inside `[0, width) x [0, depth)`.
    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        Range::sized(self.grid.width(), self.grid.depth()).contains(loc)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Whether the goal has been reached.
    pub fn is_done(&self) -> bool {
        self.state == SearchState::Done
    }

    /// Whether the search has terminated, with or without a path.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SearchState::Done | SearchState::NoPath)
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn start(&self) -> Option<Location> {
        self.endpoints.map(|(s, _)| s)
    }

    pub fn goal(&self) -> Option<Location> {
        self.endpoints.map(|(_, g)| g)
    }

    /// The node the next [`step`](Self::step) will expand.
    pub fn current_frontier(&self) -> Option<&SearchNode> {
        self.frontier.and_then(|loc| self.node(loc))
    }

    /// Look up a node in the closed set, then the open set.
    pub fn node(&self, loc: Location) -> Option<&SearchNode> {
        self.closed.get(&loc).or_else(|| self.open.get(&loc))
    }

    pub fn is_open(&self, loc: Location) -> bool {
        self.open.contains_key(&loc)
    }

    pub fn is_closed(&self, loc: Location) -> bool {
        self.closed.contains_key(&loc)
    }

    /// Open nodes in discovery order.
    pub fn open_nodes(&self) -> impl ExactSizeIterator<Item = &SearchNode> {
        self.open.values()
    }

    /// Closed nodes in the order they were closed.
    pub fn closed_nodes(&self) -> impl ExactSizeIterator<Item = &SearchNode> {
        self.closed.values()
    }

    /// Number of nodes moved to the closed set since `initialize`.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub(crate) fn known_len(&self) -> usize {
        self.open.len() + self.closed.len()
    }
}
