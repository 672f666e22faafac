//! Domain model types (pure).
//!
//! Secret generation, guess validation, scoring and statistics. Nothing in
//! this module performs I/O.

pub mod error;
pub mod guess;
pub mod score;
pub mod secret;
pub mod stats;

/// Number of digits in a secret and in every valid guess.
pub const DIGIT_COUNT: usize = 4;

// Re-export for convenience
pub use guess::{validate, ValidGuess, ValidationError};
pub use score::{score, ScoreResult};
pub use secret::Secret;
pub use stats::SessionStats;
