//! Wall-clock access for session timing.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Whole seconds between `start` and `end`, rounded half to even.
///
/// Never negative, even if the wall clock stepped backwards mid-session.
pub fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let Ok(elapsed) = (end - start).to_std() else {
        return 0;
    };
    elapsed.as_secs_f64().round_ties_even() as u64
}
