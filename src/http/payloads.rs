//! Request and response payloads for the task REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body for `POST /api/tasks`.
///
/// The title is optional here so that an absent title reaches the store
/// and fails its validation rule, rather than failing JSON binding with a
/// less specific message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Required title; validated by the task store.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional initial status label.
    pub status: Option<String>,
}

/// Body for `PUT /api/tasks/{id}`.
///
/// Every field uses double-`Option` deserialization so an omitted field,
/// an explicit `null`, and a supplied value remain distinguishable. An
/// explicit `null` clears the description but is a validation error for
/// the title and status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title; `Some(None)` is an explicit `null`.
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    /// Replacement description; `Some(None)` is an explicit clear.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// Replacement status label; `Some(None)` is an explicit `null`.
    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<String>>,
}

/// Deserializes a present-but-possibly-null field into `Some(inner)`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Body for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Fixed liveness marker.
    pub status: &'static str,
    /// Server time at response generation.
    pub timestamp: DateTime<Utc>,
}
