//! # Local Filesystem Backend

use std::fs;
use std::path::PathBuf;

use super::backend::MediaBackend;
use super::errors::{MediaError, MediaResult};

/// Local filesystem media backend
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl MediaBackend for LocalBackend {
    fn write(&self, name: &str, data: &[u8]) -> MediaResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| MediaError::Io(e.to_string()))?;

        fs::write(self.full_path(name), data).map_err(|e| MediaError::Io(e.to_string()))
    }

    fn exists(&self, name: &str) -> MediaResult<bool> {
        Ok(self.full_path(name).exists())
    }
}
