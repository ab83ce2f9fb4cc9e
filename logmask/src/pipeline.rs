//! The masking pipeline: every field matcher, in a fixed order, over one
//! text buffer.
//!
//! Order is part of the output contract. Each matcher sees the previous
//! matcher's output, so an earlier category can claim a digit run a later
//! category would also match, and a later matcher can act on an earlier
//! matcher's mask.

use std::sync::LazyLock;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::{
    error::Result,
    matcher::{self, CustomMatcher, FieldMatcher},
    shape::{LogData, from_text, to_text},
};

static BUILTIN: LazyLock<Vec<Box<dyn FieldMatcher>>> = LazyLock::new(matcher::builtin);

/// The process-wide built-in matcher table, compiled on first use.
pub(crate) fn builtin_matchers() -> &'static [Box<dyn FieldMatcher>] {
    &BUILTIN
}

/// Ordered matcher sequence applied to a single buffer.
///
/// The built-in matchers are shared; a pipeline only owns its optional
/// custom matcher, which always runs last.
///
/// ```rust
/// use logmask::MaskingPipeline;
///
/// let pipeline = MaskingPipeline::new();
/// assert_eq!(pipeline.mask_text("dob 01/01/1990"), "dob XX/XX/XXXX");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MaskingPipeline {
    custom: Option<CustomMatcher>,
}

impl MaskingPipeline {
    /// A pipeline running only the built-in matchers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a caller-supplied matcher after every built-in one.
    #[must_use]
    pub fn with_custom(mut self, custom: CustomMatcher) -> Self {
        self.custom = Some(custom);
        self
    }

    /// The caller-supplied matcher, if any.
    pub fn custom(&self) -> Option<&CustomMatcher> {
        self.custom.as_ref()
    }

    /// The matchers this pipeline applies, in order.
    pub fn matchers(&self) -> Vec<&dyn FieldMatcher> {
        let builtin = builtin_matchers();
        let mut matchers: Vec<&dyn FieldMatcher> = Vec::with_capacity(builtin.len() + 1);
        for matcher in builtin {
            matchers.push(matcher.as_ref());
        }
        if let Some(custom) = &self.custom {
            matchers.push(custom);
        }
        matchers
    }

    /// Threads `text` through every matcher.
    #[must_use]
    pub fn mask_text(&self, text: &str) -> String {
        let mut buffer = text.to_string();
        for matcher in self.matchers() {
            let masked = matcher.mask(&buffer);
            if masked != buffer {
                trace!(category = %matcher.category(), "matcher rewrote buffer");
                buffer = masked;
            }
        }
        buffer
    }

    /// Masks `input` and returns it in the same shape.
    ///
    /// Structured input goes through its JSON text; text is masked directly;
    /// any other shape is returned unchanged.
    pub fn mask(&self, input: LogData) -> Result<LogData> {
        let shape = input.shape();
        let output = match input {
            LogData::Structured(value) => LogData::Structured(self.mask_serializable(value)?),
            LogData::Text(text) => LogData::Text(self.mask_text(&text)),
            other @ LogData::Other(_) => other,
        };
        debug!(shape, "masked log data");
        Ok(output)
    }

    /// Masks a JSON value, dispatching on its shape.
    pub fn mask_value(&self, value: Value) -> Result<Value> {
        self.mask(LogData::from(value)).map(LogData::into_value)
    }

    /// Masks any serde value through its JSON text and parses it back as `T`.
    ///
    /// Fails with [`MaskError::Serialization`](crate::MaskError::Serialization)
    /// if `value` cannot be written as JSON, and with
    /// [`MaskError::Deserialization`](crate::MaskError::Deserialization) if
    /// the masked text no longer parses as `T`. Nothing is partially masked.
    pub fn mask_serializable<T>(&self, value: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let text = to_text(&value)?;
        if text.is_empty() {
            return Ok(value);
        }
        let masked = self.mask_text(&text);
        from_text(&masked).inspect_err(|err| {
            warn!(error = %err, "masked text no longer parses as JSON");
        })
    }
}
