//! The play-again loop and cross-session statistics.

use crate::clock::Clock;
use crate::model::error::AppError;
use crate::model::SessionStats;
use crate::source::LineSource;
use crate::view::{self, constants::{PLAY_AGAIN_PROMPT, PLAY_AGAIN_YES}};
use rand::Rng;
use std::io::Write;
use tracing::info;

use super::{prompt, run_session, write_lines};

/// Play sessions until the player declines another round.
///
/// After each solved session its attempt count is recorded and the player is
/// asked whether to continue. Only `y` (case-insensitive, surrounding
/// whitespace ignored) continues; any other answer, or end of input, stops.
/// An abandoned session stops play without being recorded.
///
/// On the way out the goodbye message is printed, followed by the summary
/// when at least one session was completed. The collected statistics are
/// returned to the caller.
///
/// # Errors
///
/// Returns `AppError` if reading input or writing output fails. Sessions
/// completed before the failure are not reported.
pub fn run_game<S, W, R, C>(
    input: &mut S,
    output: &mut W,
    rng: &mut R,
    clock: &C,
) -> Result<SessionStats, AppError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    let mut stats = SessionStats::new();

    while let Some(outcome) = run_session(input, output, rng, clock)? {
        stats.record(outcome.attempts);

        prompt(output, PLAY_AGAIN_PROMPT)?;
        let answer = input.read_line()?.unwrap_or_default();
        if !wants_another_round(&answer) {
            break;
        }
    }

    info!(
        games = stats.games_played(),
        best = ?stats.best(),
        worst = ?stats.worst(),
        "Play finished"
    );
    write_lines(output, &view::goodbye_lines(&stats))?;

    Ok(stats)
}

fn wants_another_round(answer: &str) -> bool {
    answer.trim().to_lowercase() == PLAY_AGAIN_YES
}
