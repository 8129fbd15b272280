//! Task record management.
//!
//! This module implements the task store: creating, reading, partially
//! updating, and deleting task records behind a uniform
//! validation-and-persistence contract that never touches HTTP concepts.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
