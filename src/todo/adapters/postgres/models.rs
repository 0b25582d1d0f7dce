//! Diesel row models for todo persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Todo identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: String,
    /// Title text.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional priority.
    pub priority: Option<String>,
    /// Status value.
    pub status: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Todo identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: String,
    /// Title text.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional priority.
    pub priority: Option<String>,
    /// Status value.
    pub status: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Full-state changeset written on update.
///
/// The owner and creation timestamp are not part of the changeset, so an
/// update can never reassign them.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoChangeset {
    /// Title text.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional priority.
    pub priority: Option<String>,
    /// Status value.
    pub status: String,
    /// Completion flag.
    pub completed: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
