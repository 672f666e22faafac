//! Player input sources.
//!
//! The game reads exactly one line per prompt. [`LineSource`] is the seam
//! between the session loop and wherever those lines come from.

use crate::model::error::InputError;

pub mod stdin;

pub use stdin::StdinSource;

/// A blocking source of input lines.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures.
    fn read_line(&mut self) -> Result<Option<String>, InputError>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        (**self).read_line()
    }
}
