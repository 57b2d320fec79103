//! # Catalog Errors

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog holds no records
    #[error("No courses available")]
    Empty,

    /// A record with the given id already exists
    #[error("Course {0} already exists")]
    DuplicateId(String),
}

impl CatalogError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Empty => 404,
            CatalogError::DuplicateId(_) => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::Empty.status_code(), 404);
        assert_eq!(
            CatalogError::DuplicateId("100".to_string()).status_code(),
            409
        );
    }

    #[test]
    fn test_duplicate_message_names_the_id() {
        let err = CatalogError::DuplicateId("300".to_string());
        assert_eq!(err.to_string(), "Course 300 already exists");
    }
}
