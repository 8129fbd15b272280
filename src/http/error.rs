//! API error type mapping store outcomes onto HTTP responses.

use crate::task::services::TaskStoreError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors surfaced to API clients as JSON `{"error": ...}` bodies.
#[derive(Debug)]
pub enum ApiError {
    /// The path identifier is not a valid integer.
    InvalidTaskId,
    /// Request data failed validation; carries the violated rule.
    Validation(String),
    /// No task exists for the requested identifier.
    TaskNotFound,
    /// No route matches the request.
    RouteNotFound,
    /// Persistence failure; detail is logged, never returned.
    Internal,
}

impl From<TaskStoreError> for ApiError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Validation(validation) => Self::Validation(validation.to_string()),
            TaskStoreError::Repository(repository) => {
                tracing::error!(error = %repository, "task store backend failure");
                Self::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidTaskId => (StatusCode::BAD_REQUEST, "Invalid task ID".to_owned()),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::TaskNotFound => (StatusCode::NOT_FOUND, "Task not found".to_owned()),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_owned()),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_owned(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
