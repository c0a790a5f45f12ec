//! Serves the generated OpenAPI document and a Swagger UI page for it.

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::state::AppState;

/// Swagger UI shell; assets come from the public CDN build.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Tasks API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api/swagger/json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// GET /api/swagger
async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// GET /api/swagger/json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Documentation routes, mounted under `/api`.
///
/// ```text
/// GET /swagger        -> Swagger UI
/// GET /swagger/json   -> OpenAPI document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/swagger", get(swagger_ui))
        .route("/swagger/json", get(openapi_json))
}
