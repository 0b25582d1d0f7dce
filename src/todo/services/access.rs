//! Service layer for owner-scoped todo CRUD.

use super::{AnonymousAccess, TodoServiceError, TodoServiceResult};
use crate::todo::{
    domain::{NewTodo, OwnerId, Todo, TodoFilter, TodoId, TodoPatch, TodoQuery},
    ports::TodoRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Owner-scoped todo access service.
///
/// Existence is checked before ownership, so a missing todo is reported as
/// `NotFound` to every caller.
pub struct TodoAccessService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    anonymous_access: AnonymousAccess,
}

impl<R, C> Clone for TodoAccessService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            anonymous_access: self.anonymous_access,
        }
    }
}

impl<R, C> TodoAccessService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new todo access service with the default anonymous policy.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            anonymous_access: AnonymousAccess::default(),
        }
    }

    /// Sets the policy for calls without a caller identity.
    #[must_use]
    pub fn with_anonymous_access(mut self, anonymous_access: AnonymousAccess) -> Self {
        self.anonymous_access = anonymous_access;
        self
    }

    /// Creates a todo owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] without a caller, or
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        owner: Option<&OwnerId>,
        new_todo: NewTodo,
    ) -> TodoServiceResult<Todo> {
        let caller = owner.ok_or(TodoServiceError::Unauthenticated)?;
        let todo = Todo::create(caller.clone(), new_todo, &*self.clock);
        self.repository.store(&todo).await?;
        tracing::info!(todo_id = %todo.id(), owner = %caller, "todo created");
        Ok(todo)
    }

    /// Lists todos in the caller's scope, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] for an anonymous call
    /// under a denying policy, or [`TodoServiceError::Repository`] when the
    /// query fails.
    pub async fn list(
        &self,
        owner: Option<&OwnerId>,
        filter: TodoFilter,
    ) -> TodoServiceResult<Vec<Todo>> {
        let scope = self.anonymous_access.scope(owner)?;
        let query = TodoQuery::scoped_to(scope).with_filter(filter);
        let todos = self.repository.find(&query).await?;
        tracing::debug!(
            owner = scope.map(OwnerId::as_str),
            count = todos.len(),
            "todos listed"
        );
        Ok(todos)
    }

    /// Retrieves a single todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no todo has `id`, or
    /// [`TodoServiceError::Forbidden`] when it belongs to another caller.
    pub async fn get(&self, owner: Option<&OwnerId>, id: TodoId) -> TodoServiceResult<Todo> {
        self.load_authorized(owner, id).await
    }

    /// Merges `patch` into a todo and persists the result.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::get`], plus
    /// [`TodoServiceError::NotFound`] when the todo disappears before the
    /// merged state is written.
    pub async fn update(
        &self,
        owner: Option<&OwnerId>,
        id: TodoId,
        patch: TodoPatch,
    ) -> TodoServiceResult<Todo> {
        let mut todo = self.load_authorized(owner, id).await?;
        todo.apply_patch(patch, &*self.clock);
        self.repository
            .update(&todo)
            .await
            .map_err(TodoServiceError::from_repository)?;
        tracing::info!(
            todo_id = %id,
            status = %todo.status(),
            completed = todo.completed(),
            "todo updated"
        );
        Ok(todo)
    }

    /// Permanently removes a todo.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::get`].
    pub async fn delete(&self, owner: Option<&OwnerId>, id: TodoId) -> TodoServiceResult<()> {
        self.load_authorized(owner, id).await?;
        self.repository
            .delete(id)
            .await
            .map_err(TodoServiceError::from_repository)?;
        tracing::info!(todo_id = %id, "todo deleted");
        Ok(())
    }

    async fn load_authorized(
        &self,
        owner: Option<&OwnerId>,
        id: TodoId,
    ) -> TodoServiceResult<Todo> {
        let scope = self.anonymous_access.scope(owner)?;
        let todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))?;

        if let Some(caller) = scope
            && !todo.is_owned_by(caller)
        {
            tracing::warn!(todo_id = %id, caller = %caller, "todo access forbidden");
            return Err(TodoServiceError::Forbidden(id));
        }
        Ok(todo)
    }
}
