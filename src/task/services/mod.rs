//! Application services for the task store.

mod store;

pub use store::{CreateTaskInput, TaskStore, TaskStoreError, TaskStoreResult, UpdateTaskInput};
