//! # HTTP Server
//!
//! The REST surface of coursebase: course CRUD under `/api/v1`, a
//! multipart upload endpoint, the static API document, and a health
//! check.
//!
//! # Design Principles
//!
//! - Every handler validates its own input before touching the store
//! - Failures are classified into [`ApiError`] and rendered once, at the
//!   transport boundary, as `{"success": false, "message": ...}`
//! - Store mutation is guarded by a single `RwLock` in the shared state

pub mod config;
pub mod course_routes;
pub mod docs_routes;
pub mod errors;
pub mod health_routes;
pub mod media_routes;
pub mod request;
pub mod server;

pub use config::HttpServerConfig;
pub use course_routes::{course_routes, CatalogState};
pub use docs_routes::{docs_routes, OPENAPI_DOCUMENT};
pub use errors::{ApiError, ApiResult};
pub use media_routes::{media_routes, MediaState};
pub use request::{CoursePayload, SearchQuery};
pub use server::HttpServer;
