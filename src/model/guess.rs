//! Guess validation.
//!
//! Raw input is parsed at the boundary into a [`ValidGuess`]; everything
//! downstream (scoring, session bookkeeping) works only with validated values.

use super::DIGIT_COUNT;
use std::fmt;
use thiserror::Error;

/// Reasons a raw guess is rejected.
///
/// Display strings are shown to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input contains something other than ASCII digits (or is empty).
    #[error("Only digits are allowed.")]
    NonDigit,

    /// Input is all digits but not exactly four of them.
    #[error("Guess must be 4 digits.")]
    WrongLength,

    /// First digit is `0`.
    #[error("Number cannot start with zero.")]
    LeadingZero,

    /// Some digit occurs more than once.
    #[error("Digits must be unique.")]
    DuplicateDigit,
}

/// A guess that passed [`validate`].
///
/// Same shape as a [`Secret`](super::Secret): four distinct digits, first
/// digit non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidGuess([u8; DIGIT_COUNT]);

impl ValidGuess {
    /// Digit values (0-9) in positional order.
    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}

impl fmt::Display for ValidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Validate a raw guess.
///
/// Checks run in a fixed order and stop at the first failure, so input that
/// breaks several rules always yields the same message:
///
/// 1. every character is an ASCII digit (empty input fails here)
/// 2. exactly four characters
/// 3. no leading zero
/// 4. no repeated digit
///
/// The caller is expected to trim surrounding whitespace first.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule violated.
pub fn validate(raw: &str) -> Result<ValidGuess, ValidationError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonDigit);
    }

    // All ASCII from here on, so bytes == chars.
    let bytes = raw.as_bytes();
    let digits: [u8; DIGIT_COUNT] = bytes
        .try_into()
        .map_err(|_| ValidationError::WrongLength)?;
    let digits = digits.map(|b| b - b'0');

    if digits[0] == 0 {
        return Err(ValidationError::LeadingZero);
    }

    let mut seen = [false; 10];
    for &d in &digits {
        if std::mem::replace(&mut seen[usize::from(d)], true) {
            return Err(ValidationError::DuplicateDigit);
        }
    }

    Ok(ValidGuess(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_guess() {
        let guess = validate("1234").unwrap();
        assert_eq!(guess.digits(), &[1, 2, 3, 4]);
    }

    #[test]
    fn accepts_zero_after_first_position() {
        assert!(validate("9012").is_ok());
    }

    #[test]
    fn rejects_letter() {
        assert_eq!(validate("12a4"), Err(ValidationError::NonDigit));
    }

    #[test]
    fn rejects_empty_input_as_non_digit() {
        assert_eq!(validate(""), Err(ValidationError::NonDigit));
    }

    #[test]
    fn rejects_sign_and_inner_whitespace() {
        assert_eq!(validate("-123"), Err(ValidationError::NonDigit));
        assert_eq!(validate("12 34"), Err(ValidationError::NonDigit));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not accepted.
        assert_eq!(validate("١٢٣٤"), Err(ValidationError::NonDigit));
    }

    #[test]
    fn rejects_short_guess() {
        assert_eq!(validate("123"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn rejects_long_guess() {
        assert_eq!(validate("12345"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn rejects_leading_zero() {
        assert_eq!(validate("0123"), Err(ValidationError::LeadingZero));
    }

    #[test]
    fn rejects_duplicate_digit() {
        assert_eq!(validate("1123"), Err(ValidationError::DuplicateDigit));
        assert_eq!(validate("1231"), Err(ValidationError::DuplicateDigit));
    }

    #[test]
    fn non_digit_takes_precedence_over_length() {
        assert_eq!(validate("12a"), Err(ValidationError::NonDigit));
    }

    #[test]
    fn length_takes_precedence_over_leading_zero() {
        assert_eq!(validate("012"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn leading_zero_takes_precedence_over_duplicates() {
        assert_eq!(validate("0012"), Err(ValidationError::LeadingZero));
    }

    #[test]
    fn messages_match_player_facing_text() {
        assert_eq!(ValidationError::NonDigit.to_string(), "Only digits are allowed.");
        assert_eq!(ValidationError::WrongLength.to_string(), "Guess must be 4 digits.");
        assert_eq!(
            ValidationError::LeadingZero.to_string(),
            "Number cannot start with zero."
        );
        assert_eq!(ValidationError::DuplicateDigit.to_string(), "Digits must be unique.");
    }

    #[test]
    fn display_round_trips_input() {
        assert_eq!(validate("5072").unwrap().to_string(), "5072");
    }
}
