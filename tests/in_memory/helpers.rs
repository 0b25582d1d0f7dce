//! Shared fixtures for in-memory repository tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use todo_service::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{OwnerId, PersistedTodoData, Todo, TodoId, TodoStatus},
    services::{TodoAccessService, TodoStatisticsService},
};
use uuid::Uuid;

/// Access service over the in-memory store.
pub type AccessService = TodoAccessService<InMemoryTodoRepository, DefaultClock>;

/// Provides a fresh in-memory repository.
#[fixture]
pub fn repo() -> InMemoryTodoRepository {
    InMemoryTodoRepository::new()
}

/// Builds access and statistics services sharing one repository.
pub fn services(
    repo: InMemoryTodoRepository,
) -> (AccessService, TodoStatisticsService<InMemoryTodoRepository>) {
    let shared = Arc::new(repo);
    (
        TodoAccessService::new(Arc::clone(&shared), Arc::new(DefaultClock)),
        TodoStatisticsService::new(shared),
    )
}

/// Parses an owner identifier.
pub fn owner(raw: &str) -> OwnerId {
    OwnerId::new(raw).expect("valid owner")
}

/// Returns a UTC instant `seconds` after a fixed epoch.
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_790_000_000 + seconds, 0)
        .single()
        .expect("timestamp within range")
}

/// Builds a todo with explicit identity and creation time.
pub fn todo_at(id: u128, owner_name: &str, title: &str, status: TodoStatus, created: i64) -> Todo {
    Todo::from_persisted(PersistedTodoData {
        id: TodoId::from_uuid(Uuid::from_u128(id)),
        owner: owner(owner_name),
        title: title.to_owned(),
        description: None,
        priority: None,
        completed: status.is_completed(),
        status,
        created_at: at(created),
        updated_at: at(created),
    })
}
