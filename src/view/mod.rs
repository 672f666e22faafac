//! Transcript formatting.
//!
//! Every line the game prints is built here as plain strings. The session
//! and tracker loops only decide *when* to print; this module decides *what*.

pub mod constants;

use crate::model::{ScoreResult, SessionStats};
use constants::*;

/// Horizontal rule of [`SEPARATOR_WIDTH`] dashes.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// `"<n> <word>"`, with an `s` appended unless `n == 1`.
pub fn plural(word: &str, n: usize) -> String {
    let suffix = if n == 1 { "" } else { "s" };
    format!("{n} {word}{suffix}")
}

/// Lines printed when a session starts. The first line is intentionally
/// empty to space consecutive sessions apart.
pub fn banner_lines() -> Vec<String> {
    vec![
        String::new(),
        GREETING.to_string(),
        separator(),
        INTRO_GENERATED.to_string(),
        INTRO_GAME.to_string(),
        separator(),
    ]
}

/// Lines printed after a rejected guess.
pub fn rejection_lines(message: &str) -> Vec<String> {
    vec![message.to_string(), separator()]
}

/// `"<N> bull[s], <M> cow[s]"`.
pub fn feedback_line(result: ScoreResult) -> String {
    format!("{}, {}", plural("bull", result.bulls), plural("cow", result.cows))
}

/// Lines printed after a scored guess.
pub fn feedback_lines(result: ScoreResult) -> Vec<String> {
    vec![feedback_line(result), separator()]
}

/// Lines printed once the secret is found.
pub fn solved_lines(attempts: u32, elapsed_secs: u64) -> Vec<String> {
    vec![
        SOLVED_HEADLINE.to_string(),
        format!("in {attempts} guesses!"),
        separator(),
        format!("That's amazing! You needed {elapsed_secs} seconds."),
    ]
}

/// Render attempt counts as `[a, b, c]`.
pub fn attempts_list(attempts: &[u32]) -> String {
    let items: Vec<String> = attempts.iter().map(u32::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Lines printed when the player quits.
///
/// The summary is only included if at least one session was completed.
pub fn goodbye_lines(stats: &SessionStats) -> Vec<String> {
    let mut lines = vec![String::new(), GOODBYE.to_string()];

    if let (Some(best), Some(worst)) = (stats.best(), stats.worst()) {
        lines.push(format!(
            "You played {} games. Attempts: {}",
            stats.games_played(),
            attempts_list(stats.attempts())
        ));
        lines.push(format!(
            "Best game: {best} attempts, Worst game: {worst} attempts"
        ));
    }

    lines
}
