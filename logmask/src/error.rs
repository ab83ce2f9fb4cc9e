//! Errors surfaced by the masking entry points.
//!
//! Unsupported input shapes are not errors: they pass through unchanged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    /// The input could not be serialized to JSON text.
    #[error("failed to serialize input for masking: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The masked text no longer parses as JSON, e.g. because a matcher
    /// rewrote a bare number.
    #[error("masked output is not valid JSON: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A custom pattern failed to compile.
    #[error("invalid custom pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, MaskError>;
