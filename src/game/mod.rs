//! Game orchestration: single sessions and the play-again loop.

pub mod session;
pub mod tracker;

pub use session::{run_session, GameSession, GuessOutcome, SessionOutcome, SessionState};
pub use tracker::run_game;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};

/// Build the random source for secret generation.
///
/// A fixed seed makes every secret of the run reproducible; otherwise the
/// generator is seeded from OS entropy.
pub fn new_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Write each line followed by a newline.
fn write_lines<W: Write + ?Sized>(output: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

/// Write a prompt without a newline and flush so it is visible before the
/// blocking read.
fn prompt<W: Write + ?Sized>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{text}")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Secret;

    #[test]
    fn seeded_rngs_agree() {
        let a = Secret::generate(&mut new_rng(Some(17)));
        let b = Secret::generate(&mut new_rng(Some(17)));
        assert_eq!(a, b);
    }

    #[test]
    fn write_lines_terminates_each_line() {
        let mut out = Vec::new();
        write_lines(&mut out, &["a".to_string(), String::new(), "b".to_string()]).unwrap();
        assert_eq!(out, b"a\n\nb\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "Enter a number: ").unwrap();
        assert_eq!(out, b"Enter a number: ");
    }
}
