//! Caller-supplied matcher, the pipeline's only configurable rule.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{FieldMatcher, PatternMatcher, Replacement};
use crate::{category::Category, error::MaskError};

/// Serializable form of a custom rule, suitable for application config files.
///
/// ```rust
/// use logmask::{CustomMatcher, CustomPattern};
///
/// let config: CustomPattern =
///     serde_json::from_str(r#"{"pattern": "secret-\\d+", "replacement": "REDACTED"}"#).unwrap();
/// let matcher = CustomMatcher::try_from(config).unwrap();
/// # let _ = matcher;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPattern {
    /// `regex` crate syntax, unanchored.
    pub pattern: String,
    /// Replacement template; `$1` or `${name}` expand capture groups.
    pub replacement: String,
}

/// Global pattern-replace matcher compiled from a caller's pattern.
///
/// It always runs after every built-in matcher.
#[derive(Clone, Debug)]
pub struct CustomMatcher {
    inner: PatternMatcher,
    source: CustomPattern,
}

impl CustomMatcher {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, MaskError> {
        Self::try_from(CustomPattern {
            pattern: pattern.to_string(),
            replacement: replacement.into(),
        })
    }

    /// The pattern and template this matcher was built from.
    pub fn source(&self) -> &CustomPattern {
        &self.source
    }
}

impl TryFrom<CustomPattern> for CustomMatcher {
    type Error = MaskError;

    fn try_from(source: CustomPattern) -> Result<Self, Self::Error> {
        let inner = PatternMatcher::new(
            Category::Custom,
            &source.pattern,
            Replacement::Template(Cow::Owned(source.replacement.clone())),
        )?;
        Ok(Self { inner, source })
    }
}

impl FieldMatcher for CustomMatcher {
    fn category(&self) -> Category {
        Category::Custom
    }

    fn mask(&self, text: &str) -> String {
        self.inner.mask(text)
    }
}
