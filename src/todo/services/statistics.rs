//! Completion statistics over an owner scope.

use super::{AnonymousAccess, TodoServiceResult};
use crate::todo::{
    domain::{OwnerId, StatusCounts, TodoQuery, TodoStats, TodoStatus},
    ports::TodoRepository,
};
use std::sync::Arc;

/// Computes per-status counts and the completion percentage.
pub struct TodoStatisticsService<R>
where
    R: TodoRepository + ?Sized,
{
    repository: Arc<R>,
    anonymous_access: AnonymousAccess,
}

impl<R> Clone for TodoStatisticsService<R>
where
    R: TodoRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            anonymous_access: self.anonymous_access,
        }
    }
}

impl<R> TodoStatisticsService<R>
where
    R: TodoRepository + ?Sized,
{
    /// Creates a new statistics service with the default anonymous policy.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            anonymous_access: AnonymousAccess::default(),
        }
    }

    /// Sets the policy for calls without a caller identity.
    #[must_use]
    pub fn with_anonymous_access(mut self, anonymous_access: AnonymousAccess) -> Self {
        self.anonymous_access = anonymous_access;
        self
    }

    /// Computes statistics for the caller's scope, or for every owner when
    /// the caller is anonymous and the policy allows it.
    ///
    /// The four counts are independent queries; if any fails, the whole
    /// computation fails and no partial summary is returned.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` for an anonymous call under a denying
    /// policy, or `Repository` when any count query fails.
    pub async fn compute(&self, owner: Option<&OwnerId>) -> TodoServiceResult<TodoStats> {
        let scope = self.anonymous_access.scope(owner)?;
        let base = TodoQuery::scoped_to(scope);
        let pending_query = base.clone().with_status(TodoStatus::Pending);
        let underprocess_query = base.clone().with_status(TodoStatus::UnderProcess);
        let completed_query = base.clone().with_status(TodoStatus::Completed);

        let (total, pending, underprocess, completed) = tokio::try_join!(
            self.repository.count(&base),
            self.repository.count(&pending_query),
            self.repository.count(&underprocess_query),
            self.repository.count(&completed_query),
        )?;

        let stats = TodoStats::from_counts(StatusCounts {
            total,
            pending,
            underprocess,
            completed,
        });
        tracing::debug!(
            owner = scope.map(OwnerId::as_str),
            total = stats.total,
            percentage = stats.percentage,
            "todo statistics computed"
        );
        Ok(stats)
    }
}
