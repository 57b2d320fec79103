//! # Media Storage Errors

use thiserror::Error;

/// Result type for media operations
pub type MediaResult<T> = Result<T, MediaError>;

/// Media storage errors
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    /// File name is empty or escapes the media directory
    #[error("Invalid file name: {0}")]
    InvalidFilename(String),

    /// Underlying filesystem failure
    #[error("Storage error: {0}")]
    Io(String),
}

impl MediaError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            MediaError::InvalidFilename(_) => 400,
            MediaError::Io(_) => 500,
        }
    }
}
