//! Service Meta Integration Tests
//!
//! Exercises the fully assembled server router: health check, the
//! static API document, and the root banner.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use coursebase::http_server::{HttpServer, HttpServerConfig};

fn full_router(temp: &TempDir) -> Router {
    let config = HttpServerConfig {
        media_dir: temp.path().to_path_buf(),
        ..Default::default()
    };
    HttpServer::with_config(config).router()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn health_reports_ok_and_version() {
    let temp = TempDir::new().unwrap();
    let router = full_router(&temp);

    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let temp = TempDir::new().unwrap();
    let router = full_router(&temp);

    let (status, body) = get(&router, "/api-docs/openapi.yaml").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("openapi:"));
    assert!(body.contains("/api/v1/course"));
}

#[tokio::test]
async fn docs_page_is_served() {
    let temp = TempDir::new().unwrap();
    let router = full_router(&temp);

    let (status, body) = get(&router, "/api-docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("swagger-ui"));
}

#[tokio::test]
async fn api_root_banner_points_at_docs() {
    let temp = TempDir::new().unwrap();
    let router = full_router(&temp);

    let (status, body) = get(&router, "/api/v1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api-docs"));
}

#[tokio::test]
async fn assembled_router_serves_the_seeded_catalog() {
    let temp = TempDir::new().unwrap();
    let router = full_router(&temp);

    let (status, body) = get(&router, "/api/v1/courses").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
}
