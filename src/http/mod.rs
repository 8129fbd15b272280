//! HTTP boundary exposing the task store as a REST API.
//!
//! Routes:
//!
//! - `GET    /health`          — liveness probe
//! - `GET    /api/tasks`       — list all tasks
//! - `POST   /api/tasks`       — create a task
//! - `GET    /api/tasks/{id}`  — fetch one task
//! - `PUT    /api/tasks/{id}`  — partially update a task
//! - `DELETE /api/tasks/{id}`  — remove a task
//!
//! Validation failures map to 400, missing rows to 404, and persistence
//! failures to 500 with the detail logged rather than returned.

mod error;
mod handlers;
mod payloads;

pub use error::ApiError;
pub use payloads::{CreateTaskBody, HealthResponse, UpdateTaskBody};

use crate::task::{ports::TaskRepository, services::TaskStore};
use axum::{Router, routing::get};
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to request handlers.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates request state wrapping the task store.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<R, C>>) -> Self {
        Self { store }
    }

    /// Returns the shared task store.
    #[must_use]
    pub fn store(&self) -> &TaskStore<R, C> {
        &self.store
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Builds the application router with request tracing attached.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
