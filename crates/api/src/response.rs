//! Shared response payload types for API handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// A bare `{ "message": ... }` confirmation body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Task deleted")]
    pub message: &'static str,
}
