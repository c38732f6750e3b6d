//! Console reply structure

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Ok,
    Error,
}

/// Outcome of handling one console line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub status: ReplyStatus,
    pub message: String,
    /// The caller should render the current state after the message
    pub show_state: bool,
    /// The console loop should exit after this reply
    #[serde(skip)]
    pub exit: bool,
}

impl Reply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Ok,
            message: message.into(),
            show_state: false,
            exit: false,
        }
    }

    /// A reply asking for the current state to be shown
    pub fn show_state() -> Self {
        Self {
            show_state: true,
            ..Self::ok("")
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Error,
            ..Self::ok(message)
        }
    }

    pub fn exit() -> Self {
        Self {
            exit: true,
            ..Self::ok("bye")
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ReplyStatus::Error
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
