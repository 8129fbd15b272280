//! Taskstore: a minimal task-management REST service.
//!
//! This crate provides a transport-independent task store — the validation
//! and persistence contract for task records — together with an HTTP
//! boundary exposing it as a REST API.
//!
//! # Architecture
//!
//! Taskstore follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`,
//!   in-memory)
//!
//! # Modules
//!
//! - [`task`]: task domain, store service, and persistence adapters
//! - [`http`]: REST boundary over the task store
//! - [`config`]: environment-driven runtime settings

pub mod config;
pub mod http;
pub mod task;
