//! Actions accepted by the timer store

use std::fmt;

use super::Timer;

/// A request to transition the timer state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a timer to the end of the collection
    AddTimer(Timer),
    /// Set the global run flag
    StartTimers,
    /// Clear the global run flag
    StopTimers,
}

impl Action {
    /// Stable label used for last-action tracking and logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddTimer(_) => "add-timer",
            Action::StartTimers => "start-timers",
            Action::StopTimers => "stop-timers",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AddTimer(timer) => write!(f, "{} ({}, {}s)", self.name(), timer.name, timer.duration),
            _ => f.write_str(self.name()),
        }
    }
}
