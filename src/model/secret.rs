//! Secret number generation.
//!
//! A secret is drawn without replacement from the ten decimal digits, with
//! the leading digit restricted to 1-9.

use super::guess::{validate, ValidationError};
use super::DIGIT_COUNT;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The hidden number a player is trying to guess.
///
/// # Invariants
///
/// - Exactly [`DIGIT_COUNT`] digits, each in `0..=9`
/// - All digits distinct
/// - First digit is never zero
///
/// The inner array is private; a `Secret` comes either from
/// [`Secret::generate`] or from parsing a string that passes guess
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret([u8; DIGIT_COUNT]);

impl Secret {
    /// Draw a uniformly random secret from the 4536 valid candidates.
    ///
    /// The leading digit is picked uniformly from 1-9, the remaining three
    /// are a uniform sample without replacement from the nine digits left.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = rng.gen_range(1..=9u8);

        let mut pool: Vec<u8> = (0..=9u8).filter(|&d| d != first).collect();
        let (picked, _) = pool.partial_shuffle(rng, DIGIT_COUNT - 1);

        let mut digits = [first; DIGIT_COUNT];
        digits[1..].copy_from_slice(picked);

        tracing::trace!(secret = %Secret(digits), "Generated secret");
        Self(digits)
    }

    /// Digit values (0-9) in positional order.
    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}

/// Parse a known secret, e.g. to replay a game. Applies the same rules as
/// guess validation.
impl FromStr for Secret {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s).map(|guess| Self(*guess.digits()))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
