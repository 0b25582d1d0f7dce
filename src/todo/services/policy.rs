//! Handling of calls that arrive without a caller identity.

use super::{TodoServiceError, TodoServiceResult};
use crate::todo::domain::OwnerId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How services treat calls without a caller identity.
///
/// Creation always requires an identity; this policy governs every other
/// operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnonymousAccess {
    /// Anonymous calls span every owner and skip ownership checks.
    #[default]
    Unscoped,
    /// Anonymous calls fail with `Unauthenticated`.
    Deny,
}

impl AnonymousAccess {
    /// Returns the canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unscoped => "unscoped",
            Self::Deny => "deny",
        }
    }

    /// Resolves the owner scope for a non-creating operation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] for an anonymous call
    /// under [`AnonymousAccess::Deny`].
    pub fn scope(self, owner: Option<&OwnerId>) -> TodoServiceResult<Option<&OwnerId>> {
        match (self, owner) {
            (Self::Deny, None) => Err(TodoServiceError::Unauthenticated),
            (_, scoped) => Ok(scoped),
        }
    }
}

/// Error returned for an unrecognised anonymous access policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown anonymous access policy '{0}', expected 'unscoped' or 'deny'")]
pub struct ParseAnonymousAccessError(pub String);

impl FromStr for AnonymousAccess {
    type Err = ParseAnonymousAccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unscoped" | "allow" => Ok(Self::Unscoped),
            "deny" => Ok(Self::Deny),
            _ => Err(ParseAnonymousAccessError(value.to_owned())),
        }
    }
}

impl fmt::Display for AnonymousAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
