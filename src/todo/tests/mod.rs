//! Unit tests for the todo module.


use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;

use crate::todo::{
    domain::{Todo, TodoId, TodoQuery},
    ports::{TodoRepository, TodoRepositoryResult},
};

mock! {
    pub Repository {}

    #[async_trait]
    impl TodoRepository for Repository {
        async fn store(&self, todo: &Todo) -> TodoRepositoryResult<()>;
        async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;
        async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;
        async fn find(&self, query: &TodoQuery) -> TodoRepositoryResult<Vec<Todo>>;
        async fn count(&self, query: &TodoQuery) -> TodoRepositoryResult<u64>;
        async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
    }
}

/// Clock that advances one second on every read, so successive creations
/// get strictly increasing timestamps.
#[derive(Debug)]
pub(super) struct SteppingClock {
    next_second: AtomicI64,
}

impl SteppingClock {
    pub(super) const fn starting_at(epoch_second: i64) -> Self {
        Self {
            next_second: AtomicI64::new(epoch_second),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(1_790_000_000)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let second = self.next_second.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(second, 0)
            .single()
            .expect("test clock stays within chrono range")
    }
}
