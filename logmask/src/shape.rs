//! Shape adapter between caller input and the flat text buffer.
//!
//! Structured records cross the boundary as compact JSON text: [`to_text`]
//! serializes, the pipeline rewrites the text, and [`from_text`] parses it
//! back. Raw strings go straight to the pipeline. Anything else passes
//! through untouched.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{MaskError, Result};

/// Caller input, resolved once into the shape the pipeline handles.
#[derive(Clone, Debug, PartialEq)]
pub enum LogData {
    /// Object or array: masked through its JSON text.
    Structured(Value),
    /// Raw text: masked directly.
    Text(String),
    /// Number, boolean or null: returned unchanged.
    Other(Value),
}

impl LogData {
    /// The shape name used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::Text(_) => "text",
            Self::Other(_) => "other",
        }
    }

    /// Converts back into a JSON value. Text becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Structured(value) | Self::Other(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }
}

impl From<Value> for LogData {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Self::Structured(value),
            Value::String(text) => Self::Text(text),
            Value::Number(_) | Value::Bool(_) | Value::Null => Self::Other(value),
        }
    }
}

impl From<String> for LogData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for LogData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<LogData> for Value {
    fn from(data: LogData) -> Self {
        data.into_value()
    }
}

impl fmt::Display for LogData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Structured(value) | Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Serializes `value` to the compact JSON text the pipeline operates on.
pub fn to_text<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(MaskError::Serialization)
}

/// Parses text produced by [`to_text`] (possibly masked) back into `T`.
pub fn from_text<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(MaskError::Deserialization)
}
