//! Open status classifier for todo records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle classifier of a todo.
///
/// The three known values drive statistics; any other value is kept
/// verbatim so that clients can store their own classifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TodoStatus {
    /// Work has not started.
    #[default]
    Pending,
    /// Work is in progress.
    UnderProcess,
    /// Work is finished.
    Completed,
    /// Any value outside the known set, stored as given.
    Other(String),
}

impl TodoStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::UnderProcess => "underprocess",
            Self::Completed => "completed",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` for [`TodoStatus::Completed`].
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

// Matching is exact: "Completed" is an unknown value, not a completed todo.
impl From<&str> for TodoStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "underprocess" => Self::UnderProcess,
            "completed" => Self::Completed,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for TodoStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" | "underprocess" | "completed" => Self::from(value.as_str()),
            _ => Self::Other(value),
        }
    }
}

impl From<TodoStatus> for String {
    fn from(value: TodoStatus) -> Self {
        match value {
            TodoStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
