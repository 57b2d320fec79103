//! Upload API Integration Tests
//!
//! Drives the multipart endpoint end to end against a temporary media
//! directory: the success response must not be produced before the
//! bytes are on disk.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use coursebase::http_server::{media_routes, MediaState};

const BOUNDARY: &str = "coursebase-test-boundary";

// =============================================================================
// Helper Functions
// =============================================================================

fn upload_router(temp: &TempDir) -> Router {
    let state = Arc::new(MediaState::new(temp.path()));
    Router::new().nest("/api/v1", media_routes(state))
}

fn file_part(field: &str, filename: &str, content_type: &str, data: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n{data}\r\n"
    )
}

fn text_part(field: &str, value: &str) -> String {
    format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n")
}

fn multipart_request(parts: &[String]) -> Request<Body> {
    let mut body = parts.concat();
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/api/v1/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

// =============================================================================
// Upload Tests
// =============================================================================

#[tokio::test]
async fn upload_stores_file_and_returns_metadata() {
    let temp = TempDir::new().unwrap();
    let router = upload_router(&temp);

    let request = multipart_request(&[file_part("image", "logo.png", "image/png", "png-bytes")]);
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "logo.png");
    assert_eq!(body["size"], 9);
    assert_eq!(body["content_type"], "image/png");
    assert!(body["id"].is_string());

    // The write happened before the response.
    let on_disk = std::fs::read(temp.path().join("logo.png")).unwrap();
    assert_eq!(on_disk, b"png-bytes");
}

#[tokio::test]
async fn upload_skips_plain_fields_and_stores_the_file() {
    let temp = TempDir::new().unwrap();
    let router = upload_router(&temp);

    let request = multipart_request(&[
        text_part("caption", "course art"),
        file_part("image", "art.jpg", "image/jpeg", "jpeg-bytes"),
    ]);
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "art.jpg");
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let temp = TempDir::new().unwrap();
    let router = upload_router(&temp);

    let request = multipart_request(&[text_part("caption", "no file here")]);
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No file provided");
}

#[tokio::test]
async fn upload_with_empty_form_is_400() {
    let temp = TempDir::new().unwrap();
    let router = upload_router(&temp);

    let request = multipart_request(&[]);
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No file provided");
}

#[tokio::test]
async fn upload_with_traversal_filename_is_400() {
    let temp = TempDir::new().unwrap();
    let router = upload_router(&temp);

    let request = multipart_request(&[file_part("image", "../evil.txt", "text/plain", "x")]);
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn upload_overwrites_existing_name() {
    let temp = TempDir::new().unwrap();
    let router = upload_router(&temp);

    let first = multipart_request(&[file_part("image", "logo.png", "image/png", "old")]);
    send(&router, first).await;

    let second = multipart_request(&[file_part("image", "logo.png", "image/png", "new")]);
    let (status, _) = send(&router, second).await;

    assert_eq!(status, StatusCode::CREATED);
    let on_disk = std::fs::read(temp.path().join("logo.png")).unwrap();
    assert_eq!(on_disk, b"new");
}
