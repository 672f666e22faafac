//! A single round: one secret, guesses until it is found.

use crate::clock::{elapsed_seconds, Clock};
use crate::model::error::AppError;
use crate::model::{score, validate, ScoreResult, Secret, ValidationError};
use crate::source::LineSource;
use crate::view::{self, constants::GUESS_PROMPT};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::io::Write;
use tracing::{debug, info};

use super::{prompt, write_lines};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next guess.
    AwaitingGuess,
    /// The secret was found. Terminal.
    Solved,
}

/// Result of submitting one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input failed validation. Does not count as an attempt.
    Rejected(ValidationError),
    /// Input was a valid guess and has been scored.
    Scored(ScoreResult),
}

/// Summary of a solved session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Valid guesses it took, including the winning one.
    pub attempts: u32,
    /// Wall-clock seconds from session start to the winning guess.
    pub elapsed_secs: u64,
}

/// State of one round of play.
///
/// Owns its secret for its whole lifetime. [`GameSession::submit`] is pure
/// bookkeeping; [`run_session`] wraps it with prompts and output.
#[derive(Debug)]
pub struct GameSession {
    secret: Secret,
    attempts: u32,
    started_at: DateTime<Utc>,
    state: SessionState,
}

impl GameSession {
    /// Start a session for `secret`, timed from `started_at`.
    pub fn new(secret: Secret, started_at: DateTime<Utc>) -> Self {
        Self {
            secret,
            attempts: 0,
            started_at,
            state: SessionState::AwaitingGuess,
        }
    }

    /// Handle one raw input line.
    ///
    /// Surrounding whitespace is trimmed before validation. Only valid
    /// guesses increment the attempt counter. A guess scoring four bulls
    /// moves the session to [`SessionState::Solved`].
    pub fn submit(&mut self, raw: &str) -> GuessOutcome {
        let guess = match validate(raw.trim()) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(input = raw, error = ?err, "Rejected guess");
                return GuessOutcome::Rejected(err);
            }
        };

        self.attempts += 1;
        let result = score(&self.secret, &guess);
        debug!(
            attempt = self.attempts,
            guess = %guess,
            bulls = result.bulls,
            cows = result.cows,
            "Scored guess"
        );

        if result.is_solved() {
            self.state = SessionState::Solved;
        }
        GuessOutcome::Scored(result)
    }

    /// Valid guesses submitted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Instant the session began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whether the secret has been guessed.
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }
}

/// Play one round over the given input and output.
///
/// Generates a fresh secret from `rng`, prints the banner and keeps
/// prompting until the secret is guessed.
///
/// Returns `Ok(None)` if input ends before the secret is found; such a
/// session is abandoned and has no outcome.
///
/// # Errors
///
/// Returns `AppError` if reading input or writing output fails.
pub fn run_session<S, W, R, C>(
    input: &mut S,
    output: &mut W,
    rng: &mut R,
    clock: &C,
) -> Result<Option<SessionOutcome>, AppError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    let secret = Secret::generate(rng);
    let mut session = GameSession::new(secret, clock.now());
    info!("Session started");

    write_lines(output, &view::banner_lines())?;

    loop {
        prompt(output, GUESS_PROMPT)?;
        let Some(line) = input.read_line()? else {
            info!(attempts = session.attempts(), "Input ended, session abandoned");
            return Ok(None);
        };

        match session.submit(&line) {
            GuessOutcome::Rejected(err) => {
                write_lines(output, &view::rejection_lines(&err.to_string()))?;
            }
            GuessOutcome::Scored(result) => {
                write_lines(output, &view::feedback_lines(result))?;
            }
        }

        if session.is_solved() {
            let elapsed_secs = elapsed_seconds(session.started_at(), clock.now());
            let outcome = SessionOutcome {
                attempts: session.attempts(),
                elapsed_secs,
            };
            write_lines(output, &view::solved_lines(outcome.attempts, elapsed_secs))?;
            info!(
                attempts = outcome.attempts,
                elapsed_secs, "Session solved"
            );
            return Ok(Some(outcome));
        }
    }
}
