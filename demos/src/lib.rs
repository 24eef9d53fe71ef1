//! Shared model for the terminal stepping demo.
//!
//! A [`Session`] owns a random maze and an [`AStarSearch`] over it, and
//! reacts to single-letter [`Command`]s: begin a search between two random
//! cells, advance it one step, show the path found so far, or run it out.
//! Every response is a plain-text frame produced by [`render`].

use std::fmt::Write as _;

use rand::Rng;
use stepstar_core::{Location, Maze};
use stepstar_paths::{AStarSearch, Evaluation, StepLog, StepOutcome};

pub const WIDTH: i32 = 30;
pub const DEPTH: i32 = 16;
pub const WALL_FRACTION: f64 = 0.25;

const HELP_TEXT: &str = "\
p  begin a new search between two random cells
c  advance the search one step
m  show the path from the current frontier to the start
r  run the search to completion
h  show this help
q  quit";

/// A single driver instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Begin,
    Step,
    ShowPath,
    Run,
    Help,
    Quit,
}

impl Command {
    /// Parse a command from one line of input. Case and surrounding
    /// whitespace are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" => Some(Self::Begin),
            "c" | "" => Some(Self::Step),
            "m" => Some(Self::ShowPath),
            "r" => Some(Self::Run),
            "h" | "?" => Some(Self::Help),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Render the maze with the search state overlaid.
///
/// `#` wall, `.` unexplored, `o` open, `x` closed, `@` frontier, `S` start,
/// `G` goal. When `path` is given only the path is drawn, as `*`.
pub fn render(search: &AStarSearch<Maze>, path: Option<&[Location]>) -> String {
    let maze = search.grid();
    let mut out = String::with_capacity(((maze.width() + 1) * maze.depth()) as usize);
    let frontier = search.current_frontier().map(|n| n.location);
    for z in 0..maze.depth() {
        for x in 0..maze.width() {
            let loc = Location::new(x, z);
            let ch = if search.start() == Some(loc) {
                'S'
            } else if search.goal() == Some(loc) {
                'G'
            } else if maze.is_wall(loc) {
                '#'
            } else if let Some(path) = path {
                if path.contains(&loc) { '*' } else { '.' }
            } else if frontier == Some(loc) {
                '@'
            } else if search.is_closed(loc) {
                'x'
            } else if search.is_open(loc) {
                'o'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn describe(eval: &Evaluation) -> String {
    let n = &eval.node;
    format!(
        "{} G: {:.2} H: {:.2} F: {:.2} ({:?})",
        n.location,
        n.g,
        n.h,
        n.f(),
        eval.discovery
    )
}

/// Demo state: one maze, one search, one random source.
pub struct Session<R: Rng> {
    search: AStarSearch<Maze>,
    rng: R,
    log: StepLog,
}

impl<R: Rng> Session<R> {
    /// Generate a bordered maze with scattered walls.
    pub fn new(mut rng: R) -> Self {
        let mut maze = Maze::bordered(WIDTH, DEPTH);
        maze.scatter_walls(&mut rng, WALL_FRACTION);
        Self::with_maze(maze, rng)
    }

    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self {
            search: AStarSearch::new(maze),
            rng,
            log: StepLog::new(),
        }
    }

    pub fn search(&self) -> &AStarSearch<Maze> {
        &self.search
    }

    /// Apply a command and return the text to show. `None` means quit.
    pub fn handle(&mut self, cmd: Command) -> Option<String> {
        let text = match cmd {
            Command::Quit => return None,
            Command::Help => HELP_TEXT.to_string(),
            Command::Begin => self.begin(),
            Command::Step => self.step(),
            Command::ShowPath => self.show_path(),
            Command::Run => self.run(),
        };
        Some(text)
    }

    fn begin(&mut self) -> String {
        let Some((start, goal)) = self.search.grid().random_endpoints(&mut self.rng) else {
            return "maze has fewer than two open cells".to_string();
        };
        if let Err(e) = self.search.initialize(start, goal) {
            return e.to_string();
        }
        log::info!("new search {start} -> {goal}");
        format!("{}search {start} -> {goal}", render(&self.search, None))
    }

    fn step(&mut self) -> String {
        self.log.clear();
        let outcome = match self.search.step_with(&mut self.log) {
            Ok(outcome) => outcome,
            Err(e) => return format!("{e} (press p to begin)"),
        };
        let mut out = render(&self.search, None);
        for eval in self.log.evaluations() {
            let _ = writeln!(out, "  {}", describe(eval));
        }
        if let Some(n) = self.log.closed_nodes().next() {
            let _ = writeln!(out, "closed {}", n.location);
        }
        let _ = write!(
            out,
            "{} after {} expansions",
            match outcome {
                StepOutcome::Continuing => "searching",
                StepOutcome::Done => "goal reached",
                StepOutcome::NoPathFound => "no path",
            },
            self.search.expansions()
        );
        out
    }

    fn show_path(&mut self) -> String {
        match self.search.current_path() {
            Ok(path) => {
                log::info!("path of {} cells", path.len());
                format!("{}path length {}", render(&self.search, Some(&path)), path.len())
            }
            Err(e) => e.to_string(),
        }
    }

    fn run(&mut self) -> String {
        match self.search.run_to_completion() {
            Ok(path) => format!(
                "{}goal reached after {} expansions, path length {}",
                render(&self.search, Some(&path)),
                self.search.expansions(),
                path.len()
            ),
            Err(e) => format!("{}{e}", render(&self.search, None)),
        }
    }
}
