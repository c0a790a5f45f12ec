//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasks_core::task::completed_from_db;
use tasks_core::types::{DbId, Timestamp};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A raw row from the `tasks` table. `completed` is stored as `0`/`1`.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    #[schema(value_type = i64, example = 1)]
    pub id: DbId,
    #[schema(example = "Buy milk")]
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: completed_from_db(row.completed),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(min_length = 1, example = "Buy milk")]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
}

/// DTO for updating an existing task. All fields are optional; omitted or
/// `null` fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(min_length = 1)]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Query parameters for `GET /api/tasks`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListParams {
    /// Only return tasks whose completion flag matches (`true` or `false`).
    pub completed: Option<bool>,
}
