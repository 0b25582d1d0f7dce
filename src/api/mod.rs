//! HTTP boundary for the todo service.
//!
//! Handlers translate requests into explicit service calls: the caller
//! identity is resolved once by [`identity::authenticate`] and passed as an
//! argument, never read from shared state.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod router;

pub use error::{ApiError, ApiErrorResponse};
pub use handlers::AppState;
pub use identity::{Authenticator, Caller, TrustedHeaderAuthenticator};
pub use router::router;
