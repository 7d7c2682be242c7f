//! The interactive command loop.
//!
//! Reads one line at a time from stdin, splits it on whitespace and
//! dispatches on the first token, case-insensitively. Every domain error is
//! recovered here: the message is printed on its own line and the loop
//! continues with the store unchanged. Only the exit command (or end of
//! input) ends the loop; malformed input never terminates the process.
//!
//! All user-facing output goes to stdout. Log output goes to stderr through
//! `tracing`, so piping stdout stays clean.

use crate::constants::{BANNER, EXIT_MESSAGE, UNKNOWN_COMMAND_MESSAGE};
use crate::errors::AppResult;
use crate::query::classify;
use crate::ride::factory::{create_return_ride, create_ride};
use crate::ride::{Ride, RideStore};
use crate::search::search;
use std::io::{self, BufRead};
use tracing::debug;

/// What the loop should do after a dispatched command.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    /// Keep reading commands.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Prints the welcome banner and processes stdin until exit or end of input.
pub fn run(store: &mut RideStore) -> AppResult<()> {
    for line in BANNER {
        println!("{}", line);
    }
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if dispatch(store, &line) == LoopAction::Quit {
            break;
        }
    }
    Ok(())
}

/// Dispatches a single input line against the store.
///
/// The first whitespace-separated token selects the command; the rest are its
/// arguments. Empty lines are ignored. Unknown commands get a one-line
/// diagnostic. Exposed separately from [`run`] so the dispatch logic is
/// testable without a stdin.
pub fn dispatch(store: &mut RideStore, line: &str) -> LoopAction {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(command) = tokens.first() else {
        return LoopAction::Continue;
    };
    debug!(command, args = tokens.len() - 1, "dispatching");

    match command.to_uppercase().as_str() {
        "L" => print_rides(store.iter()),
        "C" => {
            if let Err(error) = create_ride(
                store,
                tokens.get(1).copied(),
                tokens.get(2).copied(),
                tokens.get(3).copied(),
                tokens.get(4).copied(),
            ) {
                println!("{}", error);
            }
        }
        "R" => {
            if let Err(error) = create_return_ride(store, tokens.get(1).copied()) {
                println!("{}", error);
            }
        }
        "S" => run_search(store, &tokens[1..]),
        "0" => {
            println!("{}", EXIT_MESSAGE);
            return LoopAction::Quit;
        }
        _ => println!("{}", UNKNOWN_COMMAND_MESSAGE),
    }
    LoopAction::Continue
}

fn run_search(store: &RideStore, tokens: &[&str]) {
    let (query, errors) = classify(tokens);
    for error in &errors {
        println!("{}", error);
    }
    let results = search(store, &query);
    if results.is_empty() {
        println!("No results");
    } else {
        println!("Search completed with {} results", results.len());
        print_rides(results.into_iter());
    }
}

fn print_rides<'a>(rides: impl Iterator<Item = &'a Ride>) {
    for ride in rides {
        println!("{}", ride);
    }
}
