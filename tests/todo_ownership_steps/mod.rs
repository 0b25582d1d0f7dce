//! Step definitions for todo ownership scenarios.

pub mod world;

mod given;
mod then;
mod when;
