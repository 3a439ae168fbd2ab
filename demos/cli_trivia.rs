//! CLI trivia example.
//!
//! Usage: `cargo run --example cli_trivia -- [seed] [player...]`
//!
//! Set `RUST_LOG=trivia=debug` to see the engine's state transitions.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use trivia::{Game, RunError, Runner};

const DEFAULT_PLAYERS: [&str; 3] = ["Chet", "Pat", "Sue"];
const MAX_TURNS: usize = 10_000;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut names: Vec<String> = args.collect();
    if names.is_empty() {
        names = DEFAULT_PLAYERS.iter().map(|&name| name.to_owned()).collect();
    }

    println!("Trivia CLI example (seed {seed})");

    let mut game = Game::standard();
    for name in names {
        game.add_player(name);
    }

    match Runner::new(seed).play(&mut game, MAX_TURNS) {
        Ok(outcome) => {
            let winner = &game.players()[outcome.winner];
            println!("\n{} wins after {} turns.", winner.name(), outcome.turns);
        }
        Err(RunError::TurnLimit) => println!("\nNo winner after {MAX_TURNS} turns."),
        Err(err) => println!("\nGame error: {err}"),
    }
}
