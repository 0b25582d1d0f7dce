//! Repository port for todo persistence, filtered lookup, and counting.

use crate::todo::domain::{Todo, TodoId, TodoQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Each call touches at most one record or issues one independent query;
/// implementations provide per-record atomicity only.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateTodo`] when the identifier
    /// already exists.
    async fn store(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Persists the current state of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns every todo matching `query`, newest `created_at` first.
    ///
    /// Todos created at the same instant are ordered by identifier,
    /// descending.
    async fn find(&self, query: &TodoQuery) -> TodoRepositoryResult<Vec<Todo>>;

    /// Counts the todos matching `query`.
    async fn count(&self, query: &TodoQuery) -> TodoRepositoryResult<u64>;

    /// Permanently removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// A todo with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateTodo(TodoId),

    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
