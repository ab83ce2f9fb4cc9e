//! Pattern-based masking of sensitive data in log payloads.
//!
//! This crate separates:
//! - **Field matchers**: one recognise-and-mask rule per kind of sensitive
//!   data (national ID, mobile number, email, payment card, ...).
//! - **The masking pipeline**: every matcher, in a fixed order, over one
//!   flattened text buffer.
//! - **The shape adapter**: structured records travel through their JSON
//!   text and come back with the same keys and nesting.
//!
//! Call [`get_masked_data`] at the logging boundary:
//!
//! ```rust
//! use logmask::{LogData, get_masked_data};
//! use serde_json::json;
//!
//! let masked = get_masked_data(json!({"aadhar": "123456789012"})).unwrap();
//! assert_eq!(masked, LogData::Structured(json!({"aadhar": "XXXXXXXX9012"})));
//!
//! let masked = get_masked_data("server 192.168.1.5").unwrap();
//! assert_eq!(masked, LogData::Text("server 192.***.***.5".into()));
//! ```
//!
//! What this crate does not do:
//! - statistical or context-aware PII detection
//! - per-deployment mask policies beyond one custom pattern
//! - perform I/O or configure a logger

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod category;
mod error;
mod mask;
mod matcher;
mod pipeline;
mod shape;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use category::Category;
pub use error::{MaskError, Result};
pub use mask::{
    MASK_CHAR, MASKED_EMAIL, MASKING_FAILED_PLACEHOLDER, MaskTemplate, PATTERN_MASK_CHAR,
};
pub use matcher::{
    CustomMatcher, CustomPattern, FieldMatcher, PatternMatcher, Replacement, WindowMatcher,
};
pub use pipeline::MaskingPipeline;
pub use shape::{LogData, from_text, to_text};

/// Masks `input` with the built-in matchers and returns it in the same shape.
///
/// Objects and arrays are masked through their JSON text, strings directly;
/// numbers, booleans and null come back unchanged.
///
/// # Errors
///
/// The scanners see the JSON text, not the values, so a bare number inside
/// an object or array is masked like any other digit run. A number of six or
/// more digits (a millisecond timestamp, a numeric phone or ID field) is
/// rewritten with `X` characters, the text stops being valid JSON, and the
/// whole call fails with [`MaskError::Deserialization`]. Nothing is partially
/// masked. Serialize such fields as strings before logging them.
///
/// ```rust
/// use logmask::{MaskError, get_masked_data};
/// use serde_json::json;
///
/// let err = get_masked_data(json!({"ts": 1_700_000_000_000_u64})).unwrap_err();
/// assert!(matches!(err, MaskError::Deserialization(_)));
///
/// assert!(get_masked_data(json!({"ts": "1700000000000"})).is_ok());
/// ```
pub fn get_masked_data(input: impl Into<LogData>) -> Result<LogData> {
    MaskingPipeline::new().mask(input.into())
}

/// Like [`get_masked_data`], using `pipeline` (e.g. one with a custom matcher).
pub fn get_masked_data_with(
    input: impl Into<LogData>,
    pipeline: &MaskingPipeline,
) -> Result<LogData> {
    pipeline.mask(input.into())
}

/// Masks raw text with the built-in matchers.
#[must_use]
pub fn mask_text(text: &str) -> String {
    MaskingPipeline::new().mask_text(text)
}

/// Masks a JSON value with the built-in matchers, preserving its shape.
pub fn mask_value(value: Value) -> Result<Value> {
    MaskingPipeline::new().mask_value(value)
}

/// Masks any serde value through its JSON text with the built-in matchers.
pub fn mask_serializable<T>(value: T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    MaskingPipeline::new().mask_serializable(value)
}
