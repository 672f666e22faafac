//! Line-oriented reader over stdin (or any buffered reader).

use super::LineSource;
use crate::model::error::InputError;
use std::io::{BufRead, StdinLock};

/// Reads one line per prompt from a buffered reader.
///
/// The binary wraps a locked stdin; tests wrap byte slices. EOF is tracked
/// so that repeated reads after the end keep returning `None`.
pub struct StdinSource<R: BufRead> {
    reader: R,
    complete: bool,
}

impl StdinSource<StdinLock<'static>> {
    /// Create a source reading from the process's stdin.
    pub fn new() -> Self {
        Self::from_reader(std::io::stdin().lock())
    }
}

impl Default for StdinSource<StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinSource<R> {
    /// Create a source from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            complete: false,
        }
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl<R: BufRead> LineSource for StdinSource<R> {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        if self.complete {
            return Ok(None);
        }

        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            tracing::debug!("Input reached EOF");
            self.complete = true;
            return Ok(None);
        }

        // Strip the line terminator (LF or CRLF)
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_returns_lines_in_order() {
        let data = b"1234\n5678\n";
        let mut source = StdinSource::from_reader(&data[..]);

        assert_eq!(source.read_line().unwrap(), Some("1234".to_string()));
        assert_eq!(source.read_line().unwrap(), Some("5678".to_string()));
    }

    #[test]
    fn read_line_returns_none_at_eof() {
        let data = b"1234\n";
        let mut source = StdinSource::from_reader(&data[..]);

        source.read_line().unwrap();
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn is_complete_true_after_eof() {
        let data = b"y\n";
        let mut source = StdinSource::from_reader(&data[..]);

        assert!(!source.is_complete(), "Should not be complete initially");
        source.read_line().unwrap();
        source.read_line().unwrap();
        assert!(source.is_complete(), "Should be complete after EOF");
    }

    #[test]
    fn read_after_eof_keeps_returning_none() {
        let mut source = StdinSource::from_reader(&b""[..]);
        assert_eq!(source.read_line().unwrap(), None);
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn strips_crlf_terminator() {
        let data = b"1234\r\n";
        let mut source = StdinSource::from_reader(&data[..]);
        assert_eq!(source.read_line().unwrap(), Some("1234".to_string()));
    }

    #[test]
    fn final_line_without_newline_is_returned() {
        let data = b"n";
        let mut source = StdinSource::from_reader(&data[..]);
        assert_eq!(source.read_line().unwrap(), Some("n".to_string()));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn empty_line_is_distinct_from_eof() {
        let data = b"\n";
        let mut source = StdinSource::from_reader(&data[..]);
        assert_eq!(source.read_line().unwrap(), Some(String::new()));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let data: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut source = StdinSource::from_reader(data);
        assert!(matches!(source.read_line(), Err(InputError::Io(_))));
    }
}
