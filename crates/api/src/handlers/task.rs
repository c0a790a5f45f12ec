//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasks_core::task::task_not_found;
use tasks_core::types::DbId;
use tasks_db::models::task::{CreateTask, Task, TaskListParams, UpdateTask};
use tasks_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/tasks
///
/// Retrieve every task, optionally filtering by completion status.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    params(TaskListParams),
    responses(
        (status = 200, description = "All matching tasks, newest first", body = [Task]),
        (status = 400, description = "Malformed query string", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool, params.completed).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id}
///
/// Fetch a single task by id.
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = Task),
        (status = 400, description = "Id is not a number", body = ErrorBody),
        (status = 404, description = "No task with this id", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(task_not_found(id)))?;
    Ok(Json(task))
}

/// POST /api/tasks
///
/// Create a new task entry.
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid body", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, "Created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
///
/// Update mutable properties of an existing task. Omitted fields keep their
/// current value.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task id")),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Invalid id or body", body = ErrorBody),
        (status = 404, description = "No task with this id", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(task_not_found(id)))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
///
/// Remove a task permanently.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 400, description = "Id is not a number", body = ErrorBody),
        (status = 404, description = "No task with this id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(task_id = id, "Deleted task");
        Ok(Json(MessageResponse {
            message: "Task deleted",
        }))
    } else {
        Err(AppError::Core(task_not_found(id)))
    }
}
