//! List filters and repository query criteria.

use super::{OwnerId, Todo, TodoStatus};

/// Optional list filters supplied by a caller.
///
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    /// Exact status match.
    pub status: Option<TodoStatus>,
    /// Exact priority match.
    pub priority: Option<String>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

impl TodoFilter {
    /// Creates a filter without constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to an exact status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TodoStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts results to an exact priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Restricts results to titles containing `search`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Criteria a repository applies when finding or counting todos.
///
/// All present criteria are AND-combined. An absent owner means the query
/// spans every owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    owner: Option<OwnerId>,
    status: Option<TodoStatus>,
    priority: Option<String>,
    title_contains: Option<String>,
}

impl TodoQuery {
    /// Creates a query scoped to `owner`, or to every owner when `None`.
    #[must_use]
    pub fn scoped_to(owner: Option<&OwnerId>) -> Self {
        Self {
            owner: owner.cloned(),
            ..Self::default()
        }
    }

    /// Adds the constraints of a caller-supplied filter.
    #[must_use]
    pub fn with_filter(self, filter: TodoFilter) -> Self {
        let TodoFilter {
            status,
            priority,
            search,
        } = filter;
        Self {
            status: status.filter(|value| !value.as_str().is_empty()),
            priority: non_empty(priority),
            title_contains: non_empty(search),
            ..self
        }
    }

    /// Restricts the query to an exact status.
    #[must_use]
    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the owner scope.
    #[must_use]
    pub const fn owner(&self) -> Option<&OwnerId> {
        self.owner.as_ref()
    }

    /// Returns the exact status constraint.
    #[must_use]
    pub const fn status(&self) -> Option<&TodoStatus> {
        self.status.as_ref()
    }

    /// Returns the exact priority constraint.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Returns the title substring constraint.
    #[must_use]
    pub fn title_contains(&self) -> Option<&str> {
        self.title_contains.as_deref()
    }

    /// Returns `true` when `todo` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, todo: &Todo) -> bool {
        let owner_matches = self.owner.as_ref().is_none_or(|owner| todo.is_owned_by(owner));
        let status_matches = self.status.as_ref().is_none_or(|status| todo.status() == status);
        let priority_matches = self
            .priority
            .as_deref()
            .is_none_or(|priority| todo.priority() == Some(priority));
        let title_matches = self
            .title_contains
            .as_deref()
            .is_none_or(|needle| contains_ignoring_case(todo.title(), needle));

        owner_matches && status_matches && priority_matches && title_matches
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.is_empty())
}

fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
