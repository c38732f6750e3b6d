//! Timer store: owns the current state and serializes every transition

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Instant,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{Action, Timer, TimerState};

/// The most recent action applied to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAction {
    pub action: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug)]
struct Published {
    current: Arc<TimerState>,
    last_action: Option<LastAction>,
}

#[derive(Debug)]
struct StoreInner {
    published: Mutex<Published>,
    start_time: Instant,
    /// Every new snapshot goes out here
    change_tx: watch::Sender<Arc<TimerState>>,
}

/// Shared handle to the timer state.
///
/// Cloning is cheap and every clone sees the same state. Consumers only ever
/// get immutable snapshots; the three mutators below are the sole way in.
#[derive(Debug, Clone)]
pub struct TimerStore {
    inner: Arc<StoreInner>,
}

impl TimerStore {
    /// Create a store holding the initial state
    pub fn new() -> Self {
        let initial = Arc::new(TimerState::new());
        let (change_tx, _) = watch::channel(Arc::clone(&initial));

        Self {
            inner: Arc::new(StoreInner {
                published: Mutex::new(Published {
                    current: initial,
                    last_action: None,
                }),
                start_time: Instant::now(),
                change_tx,
            }),
        }
    }

    // The state is swapped wholesale, so a poisoned lock never guards a
    // half-applied transition.
    fn lock(&self) -> MutexGuard<'_, Published> {
        self.inner
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply an action and publish the resulting snapshot
    pub fn dispatch(&self, action: Action) -> Arc<TimerState> {
        let mut published = self.lock();

        let next = Arc::new(published.current.apply(&action));
        published.current = Arc::clone(&next);
        published.last_action = Some(LastAction {
            action: action.name().to_string(),
            at: Utc::now(),
        });

        // Publish under the lock so subscribers see snapshots in dispatch order
        self.inner.change_tx.send_replace(Arc::clone(&next));
        drop(published);

        debug!(
            "Dispatched {}: running={}, timers={}",
            action,
            next.is_running,
            next.len()
        );
        next
    }

    /// Append a timer to the collection
    pub fn add_timer(&self, timer: Timer) -> Arc<TimerState> {
        info!("Adding timer '{}' ({}s)", timer.name, timer.duration);
        self.dispatch(Action::AddTimer(timer))
    }

    /// Mark all timers as running
    pub fn start_timers(&self) -> Arc<TimerState> {
        info!("Starting timers");
        self.dispatch(Action::StartTimers)
    }

    /// Mark all timers as stopped
    pub fn stop_timers(&self) -> Arc<TimerState> {
        info!("Stopping timers");
        self.dispatch(Action::StopTimers)
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> Arc<TimerState> {
        Arc::clone(&self.lock().current)
    }

    pub fn is_running(&self) -> bool {
        self.lock().current.is_running
    }

    pub fn timers(&self) -> Vec<Timer> {
        self.lock().current.timers.clone()
    }

    /// Receive a new snapshot after every dispatch
    pub fn subscribe(&self) -> watch::Receiver<Arc<TimerState>> {
        self.inner.change_tx.subscribe()
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.lock().last_action.clone()
    }

    /// Time since the store was created, as a short string
    pub fn uptime(&self) -> String {
        format_uptime(self.inner.start_time.elapsed().as_secs())
    }
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
