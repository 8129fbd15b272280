//! Domain model for task records.
//!
//! The task domain models validated task fields, the lifecycle status
//! enumeration, and partial-update semantics while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use fields::{TaskTitle, normalize_description};
pub use ids::TaskId;
pub use task::{FieldPatch, NewTask, PersistedTaskData, Task, TaskPatch, TaskStatus};
