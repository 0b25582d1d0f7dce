//! `PostgreSQL` adapters for todo persistence.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::{BootstrapError, SCHEMA_SQL, connect, ensure_schema};
pub use repository::{PostgresTodoRepository, TodoPgPool};
