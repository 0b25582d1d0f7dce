//! Service-level error taxonomy shared by access and statistics.

use crate::todo::{domain::TodoId, ports::TodoRepositoryError};
use thiserror::Error;

/// Errors surfaced by todo services.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// The operation needs a caller identity and none was supplied.
    #[error("authentication required")]
    Unauthenticated,

    /// No todo has the requested identifier.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// The todo exists but belongs to another owner.
    #[error("todo {0} belongs to another owner")]
    Forbidden(TodoId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

impl TodoServiceError {
    /// Maps a repository miss onto [`TodoServiceError::NotFound`], keeping
    /// every other repository failure internal.
    pub(crate) fn from_repository(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;
