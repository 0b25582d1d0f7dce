//! Todo aggregate root and creation payload.

use super::{OwnerId, TodoId, TodoPatch, TodoStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Creation payload for a todo.
///
/// Title is not validated: an empty title is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    status: Option<TodoStatus>,
}

impl NewTodo {
    /// Creates a payload with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TodoStatus>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Todo aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    owner: OwnerId,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    status: TodoStatus,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted owner.
    pub owner: OwnerId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority, if any.
    pub priority: Option<String>,
    /// Persisted status.
    pub status: TodoStatus,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo owned by `owner`.
    ///
    /// `completed` starts `false` regardless of the initial status; only
    /// updates keep the flag in step with the status.
    #[must_use]
    pub fn create(owner: OwnerId, new_todo: NewTodo, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let NewTodo {
            title,
            description,
            priority,
            status,
        } = new_todo;

        Self {
            id: TodoId::new(),
            owner,
            title,
            description,
            priority,
            status: status.unwrap_or_default(),
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority, if any.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> &TodoStatus {
        &self.status
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when `owner` owns this todo.
    #[must_use]
    pub fn is_owned_by(&self, owner: &OwnerId) -> bool {
        self.owner == *owner
    }

    /// Merges `patch` into this todo and refreshes `updated_at`.
    ///
    /// Supplied fields overwrite stored ones. When the patch carries a
    /// status, `completed` is then set to whether that status is
    /// `completed`, taking precedence over an explicit flag in the patch.
    pub fn apply_patch(&mut self, patch: TodoPatch, clock: &impl Clock) {
        let TodoPatch {
            title,
            description,
            priority,
            status,
            completed,
        } = patch;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = completed {
            self.completed = value;
        }
        if let Some(value) = status {
            self.status = value;
            self.sync_completed_with_status();
        }
        self.touch(clock);
    }

    fn sync_completed_with_status(&mut self) {
        self.completed = self.status.is_completed();
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
