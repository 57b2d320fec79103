//! Media HTTP Routes
//!
//! The multipart upload endpoint. The file write completes before the
//! success response is produced; a 201 means the bytes are on disk.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::media::{LocalBackend, MediaService, StoredFile};
use crate::observability::Logger;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Media state shared across handlers
pub struct MediaState {
    service: MediaService<LocalBackend>,
}

impl MediaState {
    /// Create media state storing uploads under the given directory
    pub fn new(media_dir: &Path) -> Self {
        let backend = LocalBackend::new(media_dir.to_path_buf());
        Self {
            service: MediaService::new(backend),
        }
    }
}

// ==================
// Media Routes
// ==================

/// Create media routes
pub fn media_routes(state: Arc<MediaState>) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// `POST /upload`: store the first file-bearing multipart field under
/// its original name and return the stored-file metadata
async fn upload_handler(
    State(state): State<Arc<MediaState>>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<StoredFile>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?
    {
        // Fields without a filename are ordinary form values, not files.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

        let stored = state
            .service
            .store(&file_name, &content_type, &data)
            .map_err(|e| {
                Logger::error("upload_failed", &[("name", file_name.as_str()), ("reason", &e.to_string())]);
                ApiError::from(e)
            })?;

        Logger::info(
            "upload_stored",
            &[
                ("name", stored.name.as_str()),
                ("size", &stored.size.to_string()),
            ],
        );

        return Ok((StatusCode::CREATED, Json(stored)));
    }

    Err(ApiError::NoFile)
}
