//! Partial update payload for todo records.

use super::TodoStatus;

/// Field-by-field partial update for a todo.
///
/// Every `Some` field overwrites the stored value; `None` leaves it
/// untouched. For the optional text fields, `Some(None)` clears the stored
/// value. The owner is absent: ownership never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// Replacement priority; `Some(None)` clears it.
    pub priority: Option<Option<String>>,
    /// Replacement status; also drives the `completed` flag.
    pub status: Option<TodoStatus>,
    /// Replacement completion flag, overridden by `status` when both are set.
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the stored description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(Some(priority.into()));
        self
    }

    /// Clears the stored priority.
    #[must_use]
    pub fn without_priority(mut self) -> Self {
        self.priority = Some(None);
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TodoStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.completed.is_none()
    }
}
