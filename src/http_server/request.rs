//! # Request Payload Types
//!
//! Lenient wire shapes for create/update bodies and search queries.
//! Fields arrive optional so that presence checks produce classified
//! errors instead of serde rejections; price is accepted as a JSON
//! number or a string and coerced here.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::Course;

use super::errors::{ApiError, ApiResult};

/// Create/update request body: `{id, course, price}`.
///
/// `course` carries the course name.
#[derive(Debug, Clone, Deserialize)]
pub struct CoursePayload {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub course: Option<String>,

    #[serde(default)]
    pub price: Option<Value>,
}

impl CoursePayload {
    /// Validate all fields and build the course record.
    ///
    /// Missing or blank fields are [`ApiError::MissingFields`]; a price
    /// that does not coerce to a finite positive number is
    /// [`ApiError::InvalidPrice`].
    pub fn into_course(self) -> ApiResult<Course> {
        let id = self
            .id
            .filter(|s| !s.trim().is_empty())
            .ok_or(ApiError::MissingFields)?;

        let name = self
            .course
            .filter(|s| !s.trim().is_empty())
            .ok_or(ApiError::MissingFields)?;

        let raw_price = self.price.ok_or(ApiError::MissingFields)?;
        let price = coerce_price(&raw_price)?;

        Ok(Course { id, name, price })
    }
}

/// Search query: `?course=<name>&price=<number>`, both required
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub course: Option<String>,

    #[serde(default)]
    pub price: Option<String>,
}

/// Coerce a JSON number or numeric string into a valid price.
///
/// Parse failure, NaN, infinity, zero, and negatives all classify as
/// [`ApiError::InvalidPrice`], never a panic.
pub fn coerce_price(raw: &Value) -> ApiResult<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(ApiError::InvalidPrice),
    }
}
