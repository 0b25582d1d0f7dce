//! Personal to-do records scoped by owner.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Access and statistics services in [`services`]
//!
//! Every service call takes the caller identity as an explicit
//! `Option<OwnerId>`; nothing is read from ambient request state.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
