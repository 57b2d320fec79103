//! # Observability
//!
//! Structured logging for coursebase:
//! - one JSON line per event
//! - deterministic key ordering
//! - synchronous, no buffering

pub mod logger;

pub use logger::{Logger, Severity};
