//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The owner identifier is empty after trimming.
    #[error("owner identifier must not be empty")]
    EmptyOwner,

    /// The todo identifier is not a valid UUID.
    #[error("invalid todo identifier: {0}")]
    InvalidTodoId(String),
}
