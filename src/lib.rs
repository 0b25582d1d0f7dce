//! Todo service: owner-scoped to-do records over HTTP.
//!
//! Authenticated users create, query, update, and delete their own todos
//! and read completion statistics.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`todo`]: Todo domain, persistence ports and adapters, services
//! - [`api`]: Axum handlers, identity resolution, and error mapping
//! - [`config`]: Environment-driven configuration
//! - [`server`]: Storage bootstrap and the serving loop
//! - [`telemetry`]: Tracing subscriber set-up

pub mod api;
pub mod config;
pub mod server;
pub mod telemetry;
pub mod todo;
