//! Docs HTTP Routes
//!
//! Hosts the static API document. Rendering is delegated to a
//! CDN-hosted viewer; this service only serves the bundled artifact.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

/// The bundled OpenAPI document
pub const OPENAPI_DOCUMENT: &str = include_str!("../../docs/openapi.yaml");

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html>
  <head>
    <title>coursebase API</title>
    <meta charset="utf-8"/>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      SwaggerUIBundle({ url: "/api-docs/openapi.yaml", dom_id: "#swagger-ui" });
    </script>
  </body>
</html>
"##;

/// Create docs routes, including the `/api/v1` banner
pub fn docs_routes() -> Router {
    Router::new()
        .route("/api-docs", get(docs_page_handler))
        .route("/api-docs/openapi.yaml", get(openapi_document_handler))
        .route("/api/v1", get(banner_handler))
}

/// Rendered documentation page
async fn docs_page_handler() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// Raw OpenAPI document
async fn openapi_document_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/yaml")],
        OPENAPI_DOCUMENT,
    )
}

/// API root banner pointing at the docs
async fn banner_handler() -> Html<&'static str> {
    Html("<h1>coursebase API</h1><p>Documentation is served at <a href=\"/api-docs\">/api-docs</a>.</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_is_bundled() {
        assert!(OPENAPI_DOCUMENT.contains("openapi:"));
        assert!(OPENAPI_DOCUMENT.contains("/api/v1/course"));
    }

    #[test]
    fn test_router_builds() {
        let _router = docs_routes();
    }
}
