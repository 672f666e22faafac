//! Bulls and cows scoring.

use super::{Secret, ValidGuess, DIGIT_COUNT};

/// Feedback for a single guess.
///
/// # Invariants
///
/// - `bulls + cows <= 4`
/// - `bulls == 4` exactly when the guess equals the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Right digit, right position.
    pub bulls: usize,
    /// Right digit, wrong position.
    pub cows: usize,
}

impl ScoreResult {
    /// True when every position is a bull.
    pub fn is_solved(&self) -> bool {
        self.bulls == DIGIT_COUNT
    }
}

/// Score `guess` against `secret`.
///
/// Bull positions are removed from both sides before cows are counted, and
/// every cow consumes one occurrence of its digit from the secret's
/// remainder. With distinct digits on both sides the removal never changes
/// the result, but it keeps the count exact should repeated digits ever be
/// allowed.
pub fn score(secret: &Secret, guess: &ValidGuess) -> ScoreResult {
    let pairs = secret.digits().iter().zip(guess.digits());

    let bulls = pairs.clone().filter(|(s, g)| s == g).count();

    let (mut secret_rest, guess_rest): (Vec<u8>, Vec<u8>) =
        pairs.filter(|(s, g)| s != g).map(|(s, g)| (*s, *g)).unzip();

    let mut cows = 0;
    for g in guess_rest {
        if let Some(pos) = secret_rest.iter().position(|&s| s == g) {
            secret_rest.remove(pos);
            cows += 1;
        }
    }

    ScoreResult { bulls, cows }
}
