//! Task store service: the validation-and-persistence contract.
//!
//! Validation runs before any persistence access, so a rejected input
//! never produces a partial write. Missing rows are plain outcomes
//! (`None` / `false`), never errors.

use crate::task::{
    domain::{
        FieldPatch, NewTask, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus, TaskTitle,
        normalize_description,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Typed input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    title: String,
    description: Option<String>,
    status: Option<String>,
}

impl CreateTaskInput {
    /// Creates an input with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Typed input for partially updating a task.
///
/// Field presence is explicit: a field left untouched keeps the stored
/// value, while a supplied field replaces it. The description carries a
/// full [`FieldPatch`], so "provided as empty" (clear to null) and
/// "omitted" (keep) remain distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskInput {
    title: Option<String>,
    description: FieldPatch<Option<String>>,
    status: Option<String>,
}

impl UpdateTaskInput {
    /// Creates an empty update that changes no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    ///
    /// A value that is empty after trimming clears the stored description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldPatch::Set(Some(description.into()));
        self
    }

    /// Clears the stored description.
    #[must_use]
    pub fn clearing_description(mut self) -> Self {
        self.description = FieldPatch::Set(None);
        self
    }

    /// Sets a replacement status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Errors returned by task store operations.
///
/// "Not found" is deliberately absent: missing rows surface as `None` or
/// `false` return values.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Caller-supplied data violated a field constraint.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// Persistence backend failure.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Transport-independent task store.
#[derive(Clone)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all tasks, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the persistence backend
    /// fails.
    pub async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the persistence backend
    /// fails.
    pub async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Validates and persists a new task.
    ///
    /// The title is trimmed and must remain non-empty; the status label,
    /// when supplied, must be one of the allowed values and defaults to
    /// pending otherwise; a description that is empty after trimming is
    /// stored as null.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] before any persistence
    /// access when a field constraint is violated, and
    /// [`TaskStoreError::Repository`] when persistence fails.
    pub async fn create(&self, input: CreateTaskInput) -> TaskStoreResult<Task> {
        let title = TaskTitle::new(input.title)?;
        let description = normalize_description(input.description);
        let status = parse_status(input.status.as_deref())?.unwrap_or_default();
        let draft = NewTask::new(title, description, status, &*self.clock);
        Ok(self.repository.insert(&draft).await?)
    }

    /// Validates and applies a partial update.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier; no side
    /// effects occur in that case. Unsupplied fields keep their stored
    /// values and the update timestamp is refreshed unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] before any persistence
    /// access when a supplied field violates a constraint, and
    /// [`TaskStoreError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        id: TaskId,
        input: UpdateTaskInput,
    ) -> TaskStoreResult<Option<Task>> {
        let patch = TaskPatch {
            title: match input.title {
                Some(raw) => FieldPatch::Set(TaskTitle::new(raw)?),
                None => FieldPatch::Keep,
            },
            description: match input.description {
                FieldPatch::Set(raw) => FieldPatch::Set(normalize_description(raw)),
                FieldPatch::Keep => FieldPatch::Keep,
            },
            status: match parse_status(input.status.as_deref())? {
                Some(status) => FieldPatch::Set(status),
                None => FieldPatch::Keep,
            },
        };

        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        task.apply(patch, &*self.clock);
        match self.repository.update(&task).await {
            Ok(()) => Ok(Some(task)),
            // The row vanished between lookup and write; report plain
            // not-found rather than an error.
            Err(TaskRepositoryError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a task.
    ///
    /// Returns `Ok(true)` when a task existed and was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the persistence backend
    /// fails.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        Ok(self.repository.delete(id).await?)
    }
}

/// Parses an optional caller-supplied status label.
fn parse_status(raw: Option<&str>) -> Result<Option<TaskStatus>, TaskDomainError> {
    raw.map(TaskStatus::try_from)
        .transpose()
        .map_err(TaskDomainError::from)
}
