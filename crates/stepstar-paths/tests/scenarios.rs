use stepstar_core::{ALL, CARDINAL, Location, Maze};
use stepstar_paths::{
    AStarSearch, GridAdapter, SearchError, SearchState, StepLog, StepOutcome, chebyshev, manhattan,
};

fn run(search: &mut AStarSearch<impl GridAdapter>, limit: usize) -> StepOutcome {
    for _ in 0..limit {
        let outcome = search.step().unwrap();
        if outcome != StepOutcome::Continuing {
            return outcome;
        }
    }
    panic!("search did not finish within {limit} steps");
}

fn assert_connected(path: &[Location], dirs: &[Location]) {
    for pair in path.windows(2) {
        let d = pair[1] - pair[0];
        assert!(dirs.contains(&d), "{} -> {} is not a single step", pair[0], pair[1]);
    }
}

#[test]
fn open_five_by_five_cardinal() {
    let maze = Maze::new(5, 5);
    let mut s = AStarSearch::new(&maze);
    let (start, goal) = (Location::new(1, 1), Location::new(3, 3));
    s.initialize(start, goal).unwrap();

    assert_eq!(run(&mut s, 9), StepOutcome::Done);
    assert!(s.expansions() <= 9);

    let path = s.current_path().unwrap();
    assert_eq!(path.len(), manhattan(start, goal) as usize + 1);
    assert_eq!(path.first(), Some(&goal));
    assert_eq!(path.last(), Some(&start));
    assert_connected(&path, &CARDINAL);
}

#[test]
fn open_grid_with_diagonals() {
    let maze = Maze::new(7, 7).with_directions(&ALL);
    let mut s = AStarSearch::new(&maze);
    let (start, goal) = (Location::new(0, 0), Location::new(5, 3));
    s.initialize(start, goal).unwrap();
    let path = s.run_to_completion().unwrap();
    assert!(path.len() > chebyshev(start, goal) as usize);
    assert_eq!(path.first(), Some(&goal));
    assert_eq!(path.last(), Some(&start));
    assert_connected(&path, &ALL);
}

#[test]
fn routes_around_a_wall() {
    let maze = Maze::parse(
        "\
#######
#.....#
#.###.#
#.#.#.#
#.#.#.#
#.....#
#######",
    )
    .unwrap();
    let mut s = AStarSearch::new(&maze);
    let (start, goal) = (Location::new(1, 5), Location::new(3, 3));
    s.initialize(start, goal).unwrap();
    let path = s.run_to_completion().unwrap();
    assert_eq!(path.first(), Some(&goal));
    assert_eq!(path.last(), Some(&start));
    assert_connected(&path, &CARDINAL);
    assert!(path.iter().all(|&loc| !maze.is_wall(loc)));
}

#[test]
fn enclosed_goal_reports_no_path() {
    let maze = Maze::parse(
        "\
#######
#.....#
#..#..#
#.#.#.#
#..#..#
#.....#
#######",
    )
    .unwrap();
    let mut s = AStarSearch::new(&maze);
    s.initialize(Location::new(1, 1), Location::new(3, 3)).unwrap();
    assert_eq!(run(&mut s, 64), StepOutcome::NoPathFound);
    assert_eq!(s.state(), SearchState::NoPath);
    assert_eq!(s.open_nodes().len(), 0);
    assert!(!s.is_closed(Location::new(3, 3)));
    assert_eq!(s.run_to_completion(), Err(SearchError::NoPathFound));
}

#[test]
fn start_equals_goal() {
    let maze = Maze::new(5, 5);
    let mut s = AStarSearch::new(&maze);
    let here = Location::new(2, 2);
    s.initialize(here, here).unwrap();
    assert_eq!(s.step(), Ok(StepOutcome::Done));
    assert!(s.is_done());
    assert_eq!(s.reconstruct_path(here).unwrap(), vec![here]);
}

#[test]
fn stepping_after_done_changes_nothing() {
    let maze = Maze::new(6, 4);
    let mut s = AStarSearch::new(&maze);
    s.initialize(Location::new(0, 0), Location::new(5, 3)).unwrap();
    s.run_to_completion().unwrap();

    let open: Vec<_> = s.open_nodes().copied().collect();
    let closed: Vec<_> = s.closed_nodes().copied().collect();
    let frontier = s.current_frontier().copied();
    let mut log = StepLog::new();
    for _ in 0..3 {
        assert_eq!(s.step_with(&mut log), Ok(StepOutcome::Done));
    }
    assert!(log.events.is_empty());
    assert_eq!(s.open_nodes().copied().collect::<Vec<_>>(), open);
    assert_eq!(s.closed_nodes().copied().collect::<Vec<_>>(), closed);
    assert_eq!(s.current_frontier().copied(), frontier);
}

#[test]
fn observer_sees_each_closed_node_once() {
    let maze = Maze::new(6, 6);
    let mut s = AStarSearch::new(&maze);
    s.initialize(Location::new(0, 5), Location::new(5, 0)).unwrap();
    let mut log = StepLog::new();
    while s.step_with(&mut log).unwrap() == StepOutcome::Continuing {}
    let closed: Vec<_> = log.closed_nodes().map(|n| n.location).collect();
    assert_eq!(closed.len(), s.expansions());
    assert_eq!(
        closed,
        s.closed_nodes().map(|n| n.location).collect::<Vec<_>>()
    );
    assert_eq!(closed.last(), Some(&Location::new(5, 0)));
}

/// A grid that panics when queried outside its storage, like a raw array.
struct RawGrid {
    cells: Vec<Vec<bool>>,
}

impl GridAdapter for RawGrid {
    fn is_blocked(&self, loc: Location) -> bool {
        self.cells[loc.z as usize][loc.x as usize]
    }

    fn width(&self) -> i32 {
        self.cells[0].len() as i32
    }

    fn depth(&self) -> i32 {
        self.cells.len() as i32
    }

    fn directions(&self) -> &[Location] {
        &CARDINAL
    }
}

#[test]
fn adapter_is_never_queried_out_of_bounds() {
    let grid = RawGrid {
        cells: vec![vec![false; 3]; 3],
    };
    let mut s = AStarSearch::new(grid);
    s.initialize(Location::new(0, 0), Location::new(2, 2)).unwrap();
    let path = s.run_to_completion().unwrap();
    assert_eq!(path.len(), 5);
}
