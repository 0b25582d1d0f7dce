//! Connection pool construction and schema bootstrap.
//!
//! Both steps run once at process start; any failure is meant to be fatal.

use super::repository::TodoPgPool;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// Idempotent DDL for the `todos` table and its indexes.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_todos/up.sql");

/// Errors raised while preparing the `PostgreSQL` store.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The pool could not open its initial connections.
    #[error("failed to connect to database: {0}")]
    Connect(#[from] PoolError),

    /// Applying the schema failed.
    #[error("failed to apply todo schema: {0}")]
    Schema(#[from] diesel::result::Error),

    /// The blocking bootstrap task did not complete.
    #[error("bootstrap task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Builds a connection pool, failing when the database is unreachable.
///
/// # Errors
///
/// Returns [`BootstrapError::Connect`] when the pool cannot establish its
/// initial connections.
pub async fn connect(database_url: &str, max_size: u32) -> Result<TodoPgPool, BootstrapError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder().max_size(max_size).build(manager)
    })
    .await??;
    Ok(pool)
}

/// Creates the `todos` table and indexes when missing.
///
/// # Errors
///
/// Returns [`BootstrapError`] when no connection is available or the DDL
/// fails.
pub async fn ensure_schema(pool: &TodoPgPool) -> Result<(), BootstrapError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), BootstrapError> {
        let mut connection = pool.get()?;
        connection.batch_execute(SCHEMA_SQL)?;
        Ok(())
    })
    .await?
}
