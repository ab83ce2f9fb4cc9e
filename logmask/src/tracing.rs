//! Adapters for emitting masked values through `tracing`.
//!
//! [`TracingMaskedExt`] masks a value with the built-in pipeline and wraps
//! the result as a display value, so the original never reaches the
//! subscriber:
//!
//! ```rust
//! use logmask::tracing::TracingMaskedExt;
//!
//! let line = "login from 10.1.2.3";
//! tracing::info!(line = %line.tracing_masked(), "request");
//! ```
//!
//! Structured values that cannot be masked (their masked text no longer
//! parses) are logged as [`MASKING_FAILED_PLACEHOLDER`](crate::MASKING_FAILED_PLACEHOLDER),
//! never in clear text.

use serde_json::Value;
use tracing::field::{DisplayValue, display};

use crate::{
    mask::MASKING_FAILED_PLACEHOLDER,
    pipeline::MaskingPipeline,
    shape::{LogData, to_text},
};

/// Extension trait for logging masked values as display strings.
///
/// The output is a flat string; structured values are rendered as their
/// masked JSON text.
pub trait TracingMaskedExt {
    /// Masks the value and wraps it for `tracing` as a display value.
    fn tracing_masked(&self) -> DisplayValue<String>;

    /// Like [`tracing_masked`](Self::tracing_masked), with a caller pipeline.
    fn tracing_masked_with(&self, pipeline: &MaskingPipeline) -> DisplayValue<String>;
}

impl TracingMaskedExt for str {
    fn tracing_masked(&self) -> DisplayValue<String> {
        self.tracing_masked_with(&MaskingPipeline::new())
    }

    fn tracing_masked_with(&self, pipeline: &MaskingPipeline) -> DisplayValue<String> {
        display(pipeline.mask_text(self))
    }
}

impl TracingMaskedExt for Value {
    fn tracing_masked(&self) -> DisplayValue<String> {
        self.tracing_masked_with(&MaskingPipeline::new())
    }

    fn tracing_masked_with(&self, pipeline: &MaskingPipeline) -> DisplayValue<String> {
        LogData::from(self.clone()).tracing_masked_with(pipeline)
    }
}

impl TracingMaskedExt for LogData {
    fn tracing_masked(&self) -> DisplayValue<String> {
        self.tracing_masked_with(&MaskingPipeline::new())
    }

    fn tracing_masked_with(&self, pipeline: &MaskingPipeline) -> DisplayValue<String> {
        display(render_masked(self, pipeline))
    }
}

fn render_masked(data: &LogData, pipeline: &MaskingPipeline) -> String {
    match pipeline.mask(data.clone()) {
        Ok(LogData::Text(text)) => text,
        Ok(LogData::Structured(value) | LogData::Other(value)) => {
            to_text(&value).unwrap_or_else(|_| MASKING_FAILED_PLACEHOLDER.to_string())
        }
        Err(_) => MASKING_FAILED_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{TracingMaskedExt, render_masked};
    use crate::{mask::MASKING_FAILED_PLACEHOLDER, pipeline::MaskingPipeline, shape::LogData};

    #[test]
    fn text_is_masked_before_display() {
        let display_value = "dob 01/01/1990".tracing_masked();
        assert_eq!(format!("{display_value:?}"), "dob XX/XX/XXXX");
    }

    #[test]
    fn structured_value_renders_as_masked_json() {
        let value = json!({"email": "abc@xyc.com"});
        let display_value = value.tracing_masked();
        assert_eq!(
            format!("{display_value:?}"),
            r#"{"email":"XXXXXX@XXX.XX"}"#
        );
    }

    #[test]
    fn unmaskable_value_renders_placeholder() {
        // A bare mobile number stops being valid JSON once masked.
        let data = LogData::Structured(json!({"mobile": 9_876_543_210_u64}));
        assert_eq!(
            render_masked(&data, &MaskingPipeline::new()),
            MASKING_FAILED_PLACEHOLDER
        );
    }

    #[test]
    fn other_shapes_render_unchanged() {
        let display_value = LogData::Other(json!(42)).tracing_masked();
        assert_eq!(format!("{display_value:?}"), "42");
    }
}
