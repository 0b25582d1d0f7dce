//! Application services for owner-scoped todo access and statistics.

mod access;
mod error;
mod policy;
mod statistics;

pub use access::TodoAccessService;
pub use error::{TodoServiceError, TodoServiceResult};
pub use policy::{AnonymousAccess, ParseAnonymousAccessError};
pub use statistics::TodoStatisticsService;
