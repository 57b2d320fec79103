//! # Media Service and Stored-File Metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::backend::MediaBackend;
use super::errors::{MediaError, MediaResult};
use crate::observability::Logger;

/// Metadata for a stored upload, returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl StoredFile {
    /// Create metadata for a freshly stored file
    pub fn new(name: String, content_type: String, size: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            size,
            content_type,
            uploaded_at: Utc::now(),
        }
    }
}

/// Stores uploads through a backend, keeping the original file name.
#[derive(Debug)]
pub struct MediaService<B: MediaBackend> {
    backend: B,
}

impl<B: MediaBackend> MediaService<B> {
    /// Create a new media service
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist an upload and return its metadata.
    ///
    /// The write completes before this returns; a success result means
    /// the bytes are on disk. Re-uploading a name overwrites the old
    /// content.
    pub fn store(&self, name: &str, content_type: &str, data: &[u8]) -> MediaResult<StoredFile> {
        validate_filename(name)?;

        if self.backend.exists(name)? {
            Logger::warn("upload_overwrite", &[("name", name)]);
        }

        self.backend.write(name, data)?;

        Ok(StoredFile::new(
            name.to_string(),
            content_type.to_string(),
            data.len() as u64,
        ))
    }
}

/// Reject names that are blank or could escape the media directory.
fn validate_filename(name: &str) -> MediaResult<()> {
    if name.trim().is_empty() {
        return Err(MediaError::InvalidFilename("empty".to_string()));
    }

    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(MediaError::InvalidFilename(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::local::LocalBackend;
    use tempfile::TempDir;

    fn service_in(temp: &TempDir) -> MediaService<LocalBackend> {
        MediaService::new(LocalBackend::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_store_writes_before_returning() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let stored = service.store("logo.png", "image/png", b"png-bytes").unwrap();

        assert_eq!(stored.name, "logo.png");
        assert_eq!(stored.size, 9);
        assert_eq!(stored.content_type, "image/png");
        let on_disk = std::fs::read(temp.path().join("logo.png")).unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[test]
    fn test_store_rejects_traversal_names() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        for bad in ["../evil.txt", "a/b.txt", "a\\b.txt", "  ", ""] {
            let result = service.store(bad, "text/plain", b"x");
            assert!(matches!(result, Err(MediaError::InvalidFilename(_))));
        }
    }

    #[test]
    fn test_metadata_fields() {
        let stored = StoredFile::new("a.txt".to_string(), "text/plain".to_string(), 3);
        assert_eq!(stored.size, 3);

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["content_type"], "text/plain");
        assert!(json["id"].is_string());
    }
}
