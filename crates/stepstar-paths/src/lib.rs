//! Incremental, step-observable A* search on 2D grids.
//!
//! Unlike a run-to-completion pathfinder, [`AStarSearch`] advances one
//! expansion per [`step`](AStarSearch::step) call so a driver can pace the
//! search and a visualizer can watch every evaluated neighbour and every
//! closed node through a [`StepObserver`].
//!
//! ```
//! use stepstar_core::{Location, Maze};
//! use stepstar_paths::{AStarSearch, StepOutcome};
//!
//! let maze = Maze::new(5, 5);
//! let mut search = AStarSearch::new(&maze);
//! search.initialize(Location::new(1, 1), Location::new(3, 3)).unwrap();
//! while search.step().unwrap() == StepOutcome::Continuing {}
//! let path = search.current_path().unwrap();
//! assert_eq!(path.first(), Some(&Location::new(3, 3)));
//! assert_eq!(path.last(), Some(&Location::new(1, 1)));
//! ```
//!
//! Costs and the heuristic are both [`euclidean`] distances between cell
//! centres. By default an already-open neighbour is overwritten whenever it
//! is reached again, even at a higher cost; see [`Rediscovery`].

mod config;
mod distance;
mod error;
mod node;
mod observe;
mod path;
mod search;
mod traits;

pub use config::{Rediscovery, SearchConfig};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::SearchError;
pub use node::SearchNode;
pub use observe::{Discovery, Evaluation, NoopObserver, StepEvent, StepLog, StepObserver};
pub use search::{AStarSearch, SearchState, StepOutcome};
pub use traits::GridAdapter;
