//! OpenAPI description of the HTTP surface, generated from handler annotations.

use tasks_db::models::task::{CreateTask, Task, UpdateTask};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::task;
use crate::response::MessageResponse;
use crate::routes::health::{self, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tasks API",
        description = "Demo CRUD API with SQLite + Swagger"
    ),
    paths(
        task::list,
        task::get_by_id,
        task::create,
        task::update,
        task::delete,
        health::health_check,
    ),
    components(schemas(
        Task,
        CreateTask,
        UpdateTask,
        ErrorBody,
        MessageResponse,
        HealthResponse
    )),
    tags(
        (name = "tasks", description = "Task management"),
        (name = "health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
