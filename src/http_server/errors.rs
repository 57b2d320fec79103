//! # API Errors
//!
//! The one error type handlers return. Each variant carries its HTTP
//! status; the `IntoResponse` impl renders the uniform failure envelope
//! `{"success": false, "message": <string>}` so no failure reaches the
//! transport layer unclassified.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::media::MediaError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required body field is missing or blank
    #[error("Please provide all the details")]
    MissingFields,

    /// The course id path segment is missing or blank
    #[error("Course ID not present")]
    MissingCourseId,

    /// Price did not coerce to a finite positive number
    #[error("Price should be a positive number")]
    InvalidPrice,

    /// Search needs both query parameters
    #[error("Please provide both course and price")]
    MissingSearchParams,

    /// Body could not be parsed at all
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No course matched the id or search
    #[error("Course not found")]
    NotFound,

    /// The catalog holds no records
    #[error("No courses available")]
    EmptyCatalog,

    /// Create would produce a second record with this id
    #[error("Course {0} already exists")]
    DuplicateId(String),

    /// Upload request carried no file field
    #[error("No file provided")]
    NoFile,

    // ==================
    // Media Errors
    // ==================
    /// Media storage error
    #[error("{0}")]
    Media(#[from] MediaError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything unexpected
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::MissingCourseId => StatusCode::BAD_REQUEST,
            ApiError::InvalidPrice => StatusCode::BAD_REQUEST,
            ApiError::MissingSearchParams => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NoFile => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::EmptyCatalog => StatusCode::NOT_FOUND,

            // 409 Conflict
            ApiError::DuplicateId(_) => StatusCode::CONFLICT,

            // Pass-through from media storage
            ApiError::Media(media_err) => StatusCode::from_u16(media_err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Empty => ApiError::EmptyCatalog,
            CatalogError::DuplicateId(id) => ApiError::DuplicateId(id),
        }
    }
}

/// Failure envelope body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(&self));
        (status, body).into_response()
    }
}
