//! Shared wire model for the agency portal backend.
//!
//! This crate owns the JSON shapes exchanged with the external portal API and
//! is consumed by both `client` and `cli`. It performs no I/O: records are
//! plain serde types, `endpoints` builds request paths, and `stream` decodes
//! the newline-delimited `data: {json}` chat stream into typed events.

pub mod endpoints;
pub mod records;
pub mod stream;

pub use records::*;
pub use stream::{SourceRef, StreamDecoder, StreamEvent};

/// Error returned when a single stream envelope cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload after `data:` is not valid JSON.
    #[error("invalid stream payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is valid JSON but not an object envelope.
    #[error("stream payload is not an object")]
    NotAnObject,
}
