//! In-memory adapters for tests and local use.

mod task;

pub use task::InMemoryTaskRepository;
