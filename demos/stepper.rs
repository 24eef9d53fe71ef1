//! Line-driven A* stepping demo.
//!
//! Run: cargo run --bin stepper [seed]
//!
//! Type `p` to begin a search, `c` (or just Enter) to advance one step,
//! `m` to show the current path, `r` to run to completion, `q` to quit.
//! Set `RUST_LOG=trace` to log every evaluated neighbour.

use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use stepstar_demos::{Command, Session};

fn main() {
    env_logger::init();

    let rng = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => StdRng::seed_from_u64(seed),
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(2);
        }
        None => StdRng::seed_from_u64(rand::random()),
    };
    let mut session = Session::new(rng);

    if let Err(e) = run(&mut session) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run<R: rand::Rng>(session: &mut Session<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Some(help) = session.handle(Command::Help) {
        writeln!(stdout, "{help}")?;
    }
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = Command::parse(&line) else {
            writeln!(stdout, "unknown command {:?} (h for help)", line.trim())?;
            continue;
        };
        match session.handle(cmd) {
            Some(text) => writeln!(stdout, "{text}")?,
            None => break,
        }
        stdout.flush()?;
    }
    Ok(())
}
