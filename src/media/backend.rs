//! # Media Backend Trait

use super::errors::MediaResult;

/// Backend trait for upload storage
pub trait MediaBackend: Send + Sync + std::fmt::Debug {
    /// Write data under the given file name
    fn write(&self, name: &str, data: &[u8]) -> MediaResult<()>;

    /// Check if a file with the given name exists
    fn exists(&self, name: &str) -> MediaResult<bool>;
}
