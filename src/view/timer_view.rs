//! Presentation of a single timer

use std::fmt;

use crate::state::Timer;

/// Renders one timer's name and duration. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct TimerView<'a> {
    timer: &'a Timer,
}

impl<'a> TimerView<'a> {
    pub fn new(timer: &'a Timer) -> Self {
        Self { timer }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}s", self.timer.name, self.timer.duration)
    }
}
