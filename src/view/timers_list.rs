//! Text rendering of a whole state snapshot

use std::fmt;

use crate::state::TimerState;
use super::TimerView;

/// Header line plus one [`TimerView`] per timer, in insertion order
#[derive(Debug, Clone, Copy)]
pub struct TimersList<'a> {
    state: &'a TimerState,
}

impl<'a> TimersList<'a> {
    pub fn new(state: &'a TimerState) -> Self {
        Self { state }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimersList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.state.len();
        writeln!(
            f,
            "[{}] {} timer{}",
            self.state.run_state().as_str(),
            count,
            if count == 1 { "" } else { "s" }
        )?;

        if self.state.is_empty() {
            return writeln!(f, "  (no timers)");
        }
        for (i, timer) in self.state.timers.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, TimerView::new(timer))?;
        }
        Ok(())
    }
}
