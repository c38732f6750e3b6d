//! Owning scope for the timer store and the context handed to consumers

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::StoreError;
use super::{Timer, TimerState, TimerStore};

/// The scope that owns a timer store.
///
/// Consumers can only reach the store through [`TimersScope::context`], which
/// fails with [`StoreError::MissingContext`] while nothing is mounted.
#[derive(Debug, Default)]
pub struct TimersScope {
    store: Option<TimerStore>,
}

impl TimersScope {
    /// A scope with no store in it
    pub fn unmounted() -> Self {
        Self { store: None }
    }

    /// A scope with a freshly initialized store
    pub fn mount() -> Self {
        info!("Mounting timers store");
        Self {
            store: Some(TimerStore::new()),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// Drop the owned store.
    ///
    /// Every [`TimersContext`] borrows the scope, so none can outlive this:
    ///
    /// ```compile_fail
    /// use timers::{Timer, TimersScope};
    ///
    /// let mut scope = TimersScope::mount();
    /// let mut ctx = scope.context().unwrap();
    /// scope.unmount();
    /// ctx.add_timer(Timer::new("Ghost", 1));
    /// ```
    pub fn unmount(&mut self) {
        if self.store.take().is_some() {
            info!("Timers store unmounted");
        }
    }

    /// Get the context for this scope
    pub fn context(&self) -> Result<TimersContext<'_>, StoreError> {
        match &self.store {
            Some(store) => Ok(TimersContext::new(store)),
            None => {
                debug!("Timers context requested outside a mounted scope");
                Err(StoreError::MissingContext)
            }
        }
    }
}

/// State snapshot plus the bound mutators, as seen by a consumer.
///
/// Borrows the store from its scope; holding one keeps the scope mounted.
#[derive(Debug, Clone)]
pub struct TimersContext<'a> {
    store: &'a TimerStore,
    state: Arc<TimerState>,
}

impl<'a> TimersContext<'a> {
    fn new(store: &'a TimerStore) -> Self {
        let state = store.snapshot();
        Self { store, state }
    }

    /// Snapshot taken when this context was obtained or last refreshed
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn timers(&self) -> &[Timer] {
        &self.state.timers
    }

    /// Pick up the store's current state
    pub fn refresh(&mut self) {
        self.state = self.store.snapshot();
    }

    pub fn add_timer(&mut self, timer: Timer) {
        self.state = self.store.add_timer(timer);
    }

    pub fn start_timers(&mut self) {
        self.state = self.store.start_timers();
    }

    pub fn stop_timers(&mut self) {
        self.state = self.store.stop_timers();
    }

    /// The shared store behind this context
    pub fn store(&self) -> &'a TimerStore {
        self.store
    }
}
