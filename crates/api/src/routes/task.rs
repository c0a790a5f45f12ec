//! Route definitions for the `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes, merged into the `/api` tree.
///
/// ```text
/// GET    /tasks        -> list
/// POST   /tasks        -> create
/// GET    /tasks/{id}   -> get_by_id
/// PUT    /tasks/{id}   -> update
/// DELETE /tasks/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(task::list).post(task::create))
        .route(
            "/tasks/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}
