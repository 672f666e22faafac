//! Cross-session statistics.

/// Attempt counts of every completed session, in play order.
///
/// Created empty when play starts, appended to once per solved session, and
/// read once when the player quits. Abandoned sessions are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    attempts: Vec<u32>,
}

impl SessionStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the attempt count of a solved session.
    pub fn record(&mut self, attempts: u32) {
        self.attempts.push(attempts);
    }

    /// Number of completed sessions.
    pub fn games_played(&self) -> usize {
        self.attempts.len()
    }

    /// True until the first session is recorded.
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Attempt counts in the order sessions were played.
    pub fn attempts(&self) -> &[u32] {
        &self.attempts
    }

    /// Fewest attempts in any session, `None` before the first session.
    pub fn best(&self) -> Option<u32> {
        self.attempts.iter().copied().min()
    }

    /// Most attempts in any session, `None` before the first session.
    pub fn worst(&self) -> Option<u32> {
        self.attempts.iter().copied().max()
    }
}
