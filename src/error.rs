//! Library error types

use thiserror::Error;

/// Errors raised when reaching for the timer store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store was accessed outside the scope that owns it
    #[error("timers context is missing: the store is not mounted in this scope")]
    MissingContext,
}
