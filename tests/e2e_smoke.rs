//! E2E smoke tests for the bulls-cows binary under a pseudo-terminal.
//!
//! These tests verify interactive prompts by executing the compiled binary.
//! They are gated behind the `e2e-tests` feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use bulls_cows::game::new_rng;
use bulls_cows::model::Secret;
use expectrl::{spawn, Eof, Regex};

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_bulls-cows")
}

fn log_arg() -> String {
    std::env::temp_dir()
        .join("bulls_cows_e2e")
        .join("e2e.log")
        .display()
        .to_string()
}

#[test]
fn smoke_help_flag() {
    let mut session = spawn(format!("{} --help", binary())).expect("Failed to spawn bulls-cows");

    let _ = session
        .expect(Regex("Bulls and cows number-guessing game"))
        .expect("Failed to find description");

    let _ = session
        .expect(Regex("Usage:"))
        .expect("Failed to find help output");

    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_version_flag() {
    let mut session =
        spawn(format!("{} --version", binary())).expect("Failed to spawn bulls-cows");

    let _ = session
        .expect(Regex(r"bulls-cows \d+\.\d+\.\d+"))
        .expect("Failed to find version output");

    let _ = session.expect(Eof).expect("Process should exit");
}

/// Smoke test: a full interactive round
///
/// Plays one seeded game: an invalid guess, the winning guess, then declines
/// another round.
#[test]
fn smoke_interactive_round() {
    let seed = 77u64;
    let secret = Secret::generate(&mut new_rng(Some(seed))).to_string();

    let mut session = spawn(format!(
        "{} --seed {} --log-file {}",
        binary(),
        seed,
        log_arg()
    ))
    .expect("Failed to spawn bulls-cows");

    let _ = session
        .expect(Regex("Enter a number: "))
        .expect("Should prompt for a guess");
    session.send_line("0000").expect("Failed to send guess");

    let _ = session
        .expect(Regex("Number cannot start with zero."))
        .expect("Should reject leading zero");

    let _ = session
        .expect(Regex("Enter a number: "))
        .expect("Should prompt again");
    session.send_line(&secret).expect("Failed to send guess");

    let _ = session
        .expect(Regex("in 1 guesses!"))
        .expect("Should report one attempt");

    let _ = session
        .expect(Regex(r"Do you want to play again\? \(y/n\): "))
        .expect("Should ask to play again");
    session.send_line("n").expect("Failed to answer");

    let _ = session
        .expect(Regex("Best game: 1 attempts, Worst game: 1 attempts"))
        .expect("Should print summary");

    let _ = session.expect(Eof).expect("Process should exit");
}
