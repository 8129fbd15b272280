//! Request handlers for the task REST API.

use super::{
    AppState,
    error::ApiError,
    payloads::{CreateTaskBody, HealthResponse, UpdateTaskBody},
};
use crate::task::{
    domain::{ParseTaskStatusError, Task, TaskDomainError, TaskId},
    ports::TaskRepository,
    services::{CreateTaskInput, UpdateTaskInput},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use mockable::Clock;

/// Liveness probe, independent of the task store.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// Lists all tasks, most recently created first.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.store().list().await?;
    Ok(Json(tasks))
}

/// Retrieves a single task by path identifier.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = parse_task_id(&raw_id)?;
    let task = state.store().get(id).await?.ok_or(ApiError::TaskNotFound)?;
    Ok(Json(task))
}

/// Creates a task from a JSON body.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let mut input = CreateTaskInput::new(body.title.unwrap_or_default());
    if let Some(description) = body.description {
        input = input.with_description(description);
    }
    if let Some(status) = body.status {
        input = input.with_status(status);
    }
    let task = state.store().create(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially updates a task from a JSON body.
///
/// An explicit `null` clears the description but is rejected for the
/// title and status, which must be strings when supplied.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;
    let mut input = UpdateTaskInput::new();
    match body.title {
        Some(Some(title)) => input = input.with_title(title),
        Some(None) => {
            return Err(ApiError::Validation(TaskDomainError::EmptyTitle.to_string()));
        }
        None => {}
    }
    match body.description {
        Some(Some(description)) => input = input.with_description(description),
        Some(None) => input = input.clearing_description(),
        None => {}
    }
    match body.status {
        Some(Some(status)) => input = input.with_status(status),
        Some(None) => {
            return Err(ApiError::Validation(
                TaskDomainError::from(ParseTaskStatusError("null".to_owned())).to_string(),
            ));
        }
        None => {}
    }
    let task = state
        .store()
        .update(id, input)
        .await?
        .ok_or(ApiError::TaskNotFound)?;
    Ok(Json(task))
}

/// Removes a task, returning an empty 204 on success.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = parse_task_id(&raw_id)?;
    if state.store().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskNotFound)
    }
}

/// Fallback for unmatched routes.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Parses a path identifier, rejecting values that are not plain integers.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<i64>()
        .map(TaskId::from_i64)
        .map_err(|_| ApiError::InvalidTaskId)
}
