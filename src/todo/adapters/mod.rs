//! Adapter implementations of the todo ports.
//!
//! - [`memory`]: process-local storage for tests and development
//! - [`postgres`]: Diesel-backed `PostgreSQL` storage

pub mod memory;
pub mod postgres;
