//! Shared world state for todo ownership BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use todo_service::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{OwnerId, Todo, TodoId, TodoStats},
    services::{TodoAccessService, TodoServiceError, TodoStatisticsService},
};

/// Clock advancing one second per read so creation order is deterministic.
#[derive(Debug)]
pub struct TickingClock(AtomicI64);

impl Default for TickingClock {
    fn default() -> Self {
        Self(AtomicI64::new(1_790_000_000))
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let second = self.0.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(second, 0).single().unwrap_or_default()
    }
}

/// Access service type used by the BDD world.
pub type TestAccessService = TodoAccessService<InMemoryTodoRepository, TickingClock>;

/// Scenario world for todo ownership behaviour tests.
pub struct TodoWorld {
    pub access: TestAccessService,
    pub statistics: TodoStatisticsService<InMemoryTodoRepository>,
    pub todos_by_title: HashMap<String, TodoId>,
    pub last_listing: Option<Vec<Todo>>,
    pub last_stats: Option<TodoStats>,
    pub last_error: Option<TodoServiceError>,
}

impl TodoWorld {
    /// Creates a world over an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTodoRepository::new());
        Self {
            access: TodoAccessService::new(
                Arc::clone(&repository),
                Arc::new(TickingClock::default()),
            ),
            statistics: TodoStatisticsService::new(repository),
            todos_by_title: HashMap::new(),
            last_listing: None,
            last_stats: None,
            last_error: None,
        }
    }

    /// Resolves a todo identifier from its scenario title.
    pub fn todo_id(&self, title: &str) -> Result<TodoId, eyre::Report> {
        self.todos_by_title
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no todo titled {title:?} in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a scenario user name.
pub fn owner(user: &str) -> Result<OwnerId, eyre::Report> {
    OwnerId::new(user).map_err(|err| eyre::eyre!("invalid user in scenario: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
