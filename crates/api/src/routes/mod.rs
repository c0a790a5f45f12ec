pub mod docs;
pub mod health;
pub mod task;

use axum::Router;

use crate::error::route_not_found;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 liveness probe
/// /swagger                Swagger UI
/// /swagger/json           OpenAPI document
///
/// /tasks                  list, create
/// /tasks/{id}             get, update, delete
/// ```
///
/// An unsupported method on a known path answers like an unknown route.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(docs::router())
        .merge(task::router())
        .method_not_allowed_fallback(route_not_found)
}
