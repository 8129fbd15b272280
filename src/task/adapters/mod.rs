//! Adapter implementations of task persistence ports.

pub mod memory;
pub mod postgres;
