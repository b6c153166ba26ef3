//! Task status enumeration and parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of task statuses.
///
/// The wire and storage forms are identical (`"TODO"`, `"DELAYED"`,
/// `"DONE"`, `"FAILED"`). Unrecognized wire values are rejected by serde at
/// the parsing boundary, never inside the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is behind schedule.
    Delayed,
    /// Work finished successfully.
    Done,
    /// Work finished unsuccessfully.
    Failed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Delayed => "DELAYED",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "TODO" => Ok(Self::Todo),
            "DELAYED" => Ok(Self::Delayed),
            "DONE" => Ok(Self::Done),
            "FAILED" => Ok(Self::Failed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
