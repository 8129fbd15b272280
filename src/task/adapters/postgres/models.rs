//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::NewTask;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Backend-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status label.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; the identifier is assigned by the
/// database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status label.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewTaskRow {
    /// Builds an insert row from an unpersisted draft.
    #[must_use]
    pub fn from_draft(draft: &NewTask) -> Self {
        Self {
            title: draft.title().as_str().to_owned(),
            description: draft.description().map(ToOwned::to_owned),
            status: draft.status().as_str().to_owned(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        }
    }
}
