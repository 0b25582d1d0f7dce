//! In-memory repository for todo records.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{Todo, TodoId, TodoQuery},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<HashMap<TodoId, Todo>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, HashMap<TodoId, Todo>>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, HashMap<TodoId, Todo>>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn store(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut todos = self.write()?;
        if todos.contains_key(&todo.id()) {
            return Err(TodoRepositoryError::DuplicateTodo(todo.id()));
        }
        todos.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut todos = self.write()?;
        let stored = todos
            .get_mut(&todo.id())
            .ok_or(TodoRepositoryError::NotFound(todo.id()))?;
        *stored = todo.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let todos = self.read()?;
        Ok(todos.get(&id).cloned())
    }

    async fn find(&self, query: &TodoQuery) -> TodoRepositoryResult<Vec<Todo>> {
        let todos = self.read()?;
        let mut found: Vec<Todo> = todos
            .values()
            .filter(|todo| query.matches(todo))
            .cloned()
            .collect();
        found.sort_by_key(|todo| Reverse((todo.created_at(), todo.id())));
        Ok(found)
    }

    async fn count(&self, query: &TodoQuery) -> TodoRepositoryResult<u64> {
        let todos = self.read()?;
        let matching = todos.values().filter(|todo| query.matches(todo)).count();
        u64::try_from(matching).map_err(TodoRepositoryError::persistence)
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut todos = self.write()?;
        todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
