//! Serializable status report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{LastAction, RunState, TimerState, TimerStore};

/// Full status of a store at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateReport {
    pub state: TimerState,
    pub run_state: RunState,
    pub uptime: String,
    pub last_action: Option<LastAction>,
    pub timestamp: DateTime<Utc>,
}

impl StateReport {
    /// Build a report from the store's current snapshot
    pub fn from_store(store: &TimerStore) -> Self {
        Self::from_snapshot(&store.snapshot(), store)
    }

    /// Build a report for a snapshot already taken from `store`.
    ///
    /// The timers and run flag come from `state`; only the last action and
    /// uptime are read from the store.
    pub fn from_snapshot(state: &TimerState, store: &TimerStore) -> Self {
        Self {
            run_state: state.run_state(),
            state: state.clone(),
            uptime: store.uptime(),
            last_action: store.last_action(),
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
