//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating caller-supplied task fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming surrounding whitespace.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The title exceeds the persisted column width.
    #[error("title must not exceed {0} characters")]
    TitleTooLong(usize),

    /// The status label is not one of the allowed values.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing status labels from callers or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status '{0}', must be one of: pending, in_progress, completed")]
pub struct ParseTaskStatusError(pub String);
