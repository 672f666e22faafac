//! Test doubles for driving game loops without a terminal.

use crate::clock::Clock;
use crate::model::error::InputError;
use crate::source::LineSource;
use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::collections::VecDeque;

/// Input that replays a fixed list of lines, then reports end of input.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Queue `lines` to be returned in order.
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        Ok(self.lines.pop_front())
    }
}

/// Clock that advances by a fixed step every time it is read.
///
/// The first reading is the Unix epoch.
pub struct StepClock {
    step: Duration,
    ticks: Cell<i32>,
}

impl StepClock {
    /// Clock advancing `step_ms` milliseconds per reading.
    pub fn new(step_ms: i64) -> Self {
        Self {
            step: Duration::milliseconds(step_ms),
            ticks: Cell::new(0),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let ticks = self.ticks.get();
        self.ticks.set(ticks + 1);
        DateTime::<Utc>::default() + self.step * ticks
    }
}

/// Captured output as UTF-8 text.
pub fn output_string(output: &[u8]) -> String {
    String::from_utf8_lossy(output).into_owned()
}
