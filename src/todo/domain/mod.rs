//! Domain model for owner-scoped to-do records.
//!
//! The domain covers the record itself, the open status classifier, partial
//! updates, list filters, and the derived completion statistics. Storage and
//! transport concerns stay outside this boundary.

mod error;
mod filter;
mod ids;
mod patch;
mod stats;
mod status;
mod todo;

pub use error::TodoDomainError;
pub use filter::{TodoFilter, TodoQuery};
pub use ids::{OwnerId, TodoId};
pub use patch::TodoPatch;
pub use stats::{StatusCounts, TodoStats};
pub use status::TodoStatus;
pub use todo::{NewTodo, PersistedTodoData, Todo};
