//! Adapters for emitting masked values through `slog`.
//!
//! This module connects the masking pipeline with `slog` by providing a
//! `slog::Value` implementation for already-masked data:
//! - text is emitted with `emit_str`;
//! - structured data is emitted as a nested serde value.
//!
//! Masking happens when the wrapper is built, not when the record is
//! serialized. Failures are represented as placeholder strings rather than
//! propagated, so logging calls stay infallible.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{mask::MASKING_FAILED_PLACEHOLDER, pipeline::MaskingPipeline, shape::LogData};

/// Masked data ready to be logged with `slog`.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedLogData(LogData);

impl MaskedLogData {
    /// Masks `data` with `pipeline`.
    ///
    /// If masking fails the wrapper holds [`MASKING_FAILED_PLACEHOLDER`].
    pub fn new(data: LogData, pipeline: &MaskingPipeline) -> Self {
        let masked = pipeline
            .mask(data)
            .unwrap_or_else(|_| LogData::Text(MASKING_FAILED_PLACEHOLDER.to_string()));
        Self(masked)
    }

    /// The masked data.
    pub fn masked(&self) -> &LogData {
        &self.0
    }
}

impl SlogValue for MaskedLogData {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match &self.0 {
            LogData::Text(text) => serializer.emit_str(key, text),
            LogData::Structured(value) | LogData::Other(value) => {
                let nested = slog::Serde(value.clone());
                SlogValue::serialize(&nested, record, key, serializer)
            }
        }
    }
}

/// Extension trait for ergonomic slog logging of masked values.
///
/// ```ignore
/// use logmask::slog::SlogMaskedExt;
///
/// info!(logger, "request"; "payload" => payload.slog_masked());
/// ```
pub trait SlogMaskedExt: Into<LogData> + Sized {
    /// Masks `self` with the built-in matchers.
    fn slog_masked(self) -> MaskedLogData {
        self.slog_masked_with(&MaskingPipeline::new())
    }

    /// Masks `self` with `pipeline`.
    fn slog_masked_with(self, pipeline: &MaskingPipeline) -> MaskedLogData {
        MaskedLogData::new(self.into(), pipeline)
    }
}

impl<T: Into<LogData>> SlogMaskedExt for T {}
