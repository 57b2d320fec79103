//! # Course Record

use serde::{Deserialize, Serialize};

/// A course record.
///
/// The `name` field is serialized as `course` on the wire, the field name
/// clients of this API have always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Externally supplied identifier, unique within the catalog
    pub id: String,

    /// Course name, non-empty
    #[serde(rename = "course")]
    pub name: String,

    /// Price, finite and strictly positive
    pub price: f64,
}

impl Course {
    /// Create a new course record
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
