//! Error types for the bulls-cows application.
//!
//! This module defines the fatal error taxonomy using `thiserror`. Errors compose via `?`
//! and `From` conversions up to [`AppError`], which `main` reports before exiting.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - Reading player input failed
//!   - `std::io::Error` - Writing the game transcript failed
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be set up
//!
//! # Recovery Strategy
//!
//! Invalid guesses are **not** errors at this level. They are
//! [`ValidationError`](crate::model::ValidationError) values handled inside the session
//! loop by printing the message and prompting again. End of input is also not an error:
//! sources report it as `Ok(None)` and the game winds down normally.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// # Examples
///
/// ```no_run
/// use bulls_cows::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _line = read_player_line()?;
///     Ok(())
/// }
/// # fn read_player_line() -> Result<Option<String>, InputError> { Ok(None) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read a line of player input.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to write prompts or feedback to the output stream.
    ///
    /// Typically a closed pipe on stdout. There is nobody left to talk to, so the
    /// game stops.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

/// Errors encountered when reading player input.
#[derive(Debug, Error)]
pub enum InputError {
    /// I/O error reading from the input stream.
    ///
    /// Covers broken pipes, invalid UTF-8 on stdin and other OS-level read failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
