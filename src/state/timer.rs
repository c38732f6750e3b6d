//! Timer record

use serde::{Deserialize, Serialize};

/// A named timer with a duration in seconds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timer {
    pub name: String,
    pub duration: u64,
}

impl Timer {
    /// Create a new timer record. Neither field is validated.
    pub fn new(name: impl Into<String>, duration: u64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}
