//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{OwnerId, PersistedTodoData, Todo, TodoId, TodoQuery, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn store(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let todo_id = todo.id();
        let new_row = to_new_row(todo);

        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateTodo(todo_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let todo_id = todo.id();
        let changeset = to_changeset(todo);

        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.find(todo_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(todo_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.into_inner())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn find(&self, query: &TodoQuery) -> TodoRepositoryResult<Vec<Todo>> {
        let criteria = query.clone();
        self.run_blocking(move |connection| {
            let rows = filtered(&criteria)
                .order((todos::created_at.desc(), todos::id.desc()))
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn count(&self, query: &TodoQuery) -> TodoRepositoryResult<u64> {
        let criteria = query.clone();
        self.run_blocking(move |connection| {
            let count = filtered(&criteria)
                .count()
                .get_result::<i64>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            u64::try_from(count).map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Builds a boxed `SELECT` over `todos` with every present criterion applied.
fn filtered(query: &TodoQuery) -> todos::BoxedQuery<'static, Pg> {
    let mut statement = todos::table.into_boxed();
    if let Some(owner) = query.owner() {
        statement = statement.filter(todos::owner_id.eq(owner.as_str().to_owned()));
    }
    if let Some(status) = query.status() {
        statement = statement.filter(todos::status.eq(status.as_str().to_owned()));
    }
    if let Some(priority) = query.priority() {
        statement = statement.filter(todos::priority.eq(priority.to_owned()));
    }
    if let Some(needle) = query.title_contains() {
        statement = statement.filter(todos::title.ilike(like_pattern(needle)));
    }
    statement
}

/// Wraps `needle` in `%` wildcards, escaping `LIKE` metacharacters so the
/// match is a plain substring test.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn to_new_row(todo: &Todo) -> NewTodoRow {
    NewTodoRow {
        id: todo.id().into_inner(),
        owner_id: todo.owner().as_str().to_owned(),
        title: todo.title().to_owned(),
        description: todo.description().map(ToOwned::to_owned),
        priority: todo.priority().map(ToOwned::to_owned),
        status: todo.status().as_str().to_owned(),
        completed: todo.completed(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
    }
}

fn to_changeset(todo: &Todo) -> TodoChangeset {
    TodoChangeset {
        title: todo.title().to_owned(),
        description: todo.description().map(ToOwned::to_owned),
        priority: todo.priority().map(ToOwned::to_owned),
        status: todo.status().as_str().to_owned(),
        completed: todo.completed(),
        updated_at: todo.updated_at(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        owner_id,
        title,
        description,
        priority,
        status,
        completed,
        created_at,
        updated_at,
    } = row;

    let owner = OwnerId::new(owner_id).map_err(TodoRepositoryError::persistence)?;
    let data = PersistedTodoData {
        id: TodoId::from_uuid(id),
        owner,
        title,
        description,
        priority,
        status: TodoStatus::from(status),
        completed,
        created_at,
        updated_at,
    };
    Ok(Todo::from_persisted(data))
}
