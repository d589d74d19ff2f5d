// src/error.rs
//! Core error types.
//!
//! The model is deliberately total: unresolvable references pass through,
//! malformed drafts are filtered, and formatting never fails on shape. The
//! only fallible surface is the explicit JSON seam where request bodies are
//! encoded and response bodies are decoded, so the vocabulary here stays
//! small.

use thiserror::Error;

/// Core error type for the crate's JSON boundaries.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A request or response body was not valid JSON for the expected shape.
    #[error("malformed record payload: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
