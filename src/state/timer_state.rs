//! Timer state structure and its transition function

use serde::{Deserialize, Serialize};

use super::{Action, Timer};

/// Run state derived from the global run flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Stopped,
    Running,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
        }
    }
}

/// Timer collection plus the run flag shared by every timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub is_running: bool,
    /// Append-only, in insertion order
    pub timers: Vec<Timer>,
}

impl TimerState {
    /// Create the initial state: stopped, no timers
    pub fn new() -> Self {
        Self {
            is_running: false,
            timers: Vec::new(),
        }
    }

    /// Produce the state that follows `self` after `action`.
    ///
    /// `self` is left untouched, so any snapshot already handed out stays valid.
    pub fn apply(&self, action: &Action) -> TimerState {
        match action {
            Action::AddTimer(timer) => {
                let mut timers = Vec::with_capacity(self.timers.len() + 1);
                timers.extend_from_slice(&self.timers);
                timers.push(timer.clone());
                Self {
                    is_running: self.is_running,
                    timers,
                }
            }
            Action::StartTimers => Self {
                is_running: true,
                timers: self.timers.clone(),
            },
            Action::StopTimers => Self {
                is_running: false,
                timers: self.timers.clone(),
            },
        }
    }

    pub fn run_state(&self) -> RunState {
        if self.is_running {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: &TimerState, name: &str, duration: u64) -> TimerState {
        state.apply(&Action::AddTimer(Timer::new(name, duration)))
    }

    #[test]
    fn initial_state_is_stopped_and_empty() {
        let state = TimerState::new();
        assert!(!state.is_running);
        assert!(state.is_empty());
        assert_eq!(state.run_state(), RunState::Stopped);
        assert_eq!(state, TimerState::default());
    }

    #[test]
    fn add_appends_in_call_order() {
        let names = ["a", "b", "c", "a", "d"];
        let mut state = TimerState::new();
        for (i, name) in names.iter().enumerate() {
            state = add(&state, name, i as u64);
        }

        assert_eq!(state.len(), names.len());
        let got: Vec<&str> = state.timers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn add_keeps_existing_entries_and_flag() {
        let base = add(&add(&TimerState::new(), "A", 1), "B", 2).apply(&Action::StartTimers);
        let next = add(&base, "C", 3);

        assert_eq!(&next.timers[..2], &base.timers[..]);
        assert_eq!(next.timers[2], Timer::new("C", 3));
        assert!(next.is_running);
    }

    #[test]
    fn apply_does_not_touch_previous_state() {
        let before = add(&TimerState::new(), "Tea", 180);
        let copy = before.clone();
        let _after = add(&before, "Eggs", 600).apply(&Action::StartTimers);
        assert_eq!(before, copy);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let state = add(&TimerState::new(), "Tea", 180);

        let once = state.apply(&Action::StartTimers);
        let twice = once.apply(&Action::StartTimers);
        assert_eq!(once, twice);
        assert_eq!(twice.run_state(), RunState::Running);

        let stopped = twice.apply(&Action::StopTimers);
        assert_eq!(stopped, stopped.apply(&Action::StopTimers));
        assert_eq!(stopped.timers, state.timers);
    }

    #[test]
    fn stop_always_clears_flag() {
        let histories: [&[Action]; 3] = [
            &[],
            &[Action::StartTimers],
            &[Action::StartTimers, Action::StopTimers, Action::StartTimers],
        ];
        for history in histories {
            let state = history
                .iter()
                .fold(TimerState::new(), |s, a| s.apply(a))
                .apply(&Action::StopTimers);
            assert!(!state.is_running);
        }
    }

    #[test]
    fn serializes_with_camel_case_flag() {
        let state = add(&TimerState::new(), "Tea", 180);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isRunning": false,
                "timers": [{ "name": "Tea", "duration": 180 }]
            })
        );
    }
}
