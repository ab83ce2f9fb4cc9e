//! Global pattern-replace matchers.
//!
//! Each matcher runs one non-overlapping `replace_all` pass over the whole
//! buffer. Matches are replaced independently and never interact with the
//! window scanners' offsets.
//!
//! Several patterns open with a `lead` group (`^` or one delimiter
//! character) in place of look-behind, which the `regex` crate does not
//! support. The group is written back unchanged by the replacement.

use std::borrow::Cow;

use regex::{Captures, Regex};

use super::FieldMatcher;
use crate::{category::Category, mask::MASKED_EMAIL};

/// How a pattern match is rewritten.
// `Cow` so built-in templates stay borrowed while custom ones are owned.
#[derive(Clone, Debug)]
pub enum Replacement {
    /// `regex` replacement template; `$name` and `${name}` expand capture groups.
    Template(Cow<'static, str>),
    /// Replacement computed from the captures of each match.
    Computed(fn(&Captures<'_>) -> String),
}

impl Replacement {
    /// A template borrowed for the life of the program.
    #[must_use]
    pub const fn template(template: &'static str) -> Self {
        Self::Template(Cow::Borrowed(template))
    }
}

/// Replaces every match of a pattern across the buffer.
#[derive(Clone, Debug)]
pub struct PatternMatcher {
    category: Category,
    pattern: Regex,
    replacement: Replacement,
}

impl PatternMatcher {
    /// Compiles `pattern`; matches are rewritten with `replacement`.
    pub fn new(
        category: Category,
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            category,
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl FieldMatcher for PatternMatcher {
    fn category(&self) -> Category {
        self.category
    }

    fn mask(&self, text: &str) -> String {
        match &self.replacement {
            Replacement::Template(template) => self
                .pattern
                .replace_all(text, template.as_ref())
                .into_owned(),
            Replacement::Computed(compute) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| compute(caps))
                .into_owned(),
        }
    }
}

/// Keeps the leading delimiter and writes `***` for every directory segment.
/// The trailing file name (after the last `/`) is outside the match.
fn mask_path_segments(caps: &Captures<'_>) -> String {
    let lead = caps.name("lead").map_or("", |m| m.as_str());
    let segments = caps
        .name("dirs")
        .map_or(0, |m| m.as_str().matches('/').count());
    format!("{lead}{}/", "/***".repeat(segments))
}

fn rule(category: Category, pattern: &str, replacement: Replacement) -> PatternMatcher {
    PatternMatcher::new(category, pattern, replacement).expect("built-in pattern compiles")
}

/// The global matchers in pipeline order.
pub(crate) fn builtin() -> Vec<PatternMatcher> {
    vec![
        rule(
            Category::Email,
            r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+",
            Replacement::template(MASKED_EMAIL),
        ),
        rule(
            Category::IpAddress,
            r"\b(?P<first>[0-9]{1,3})\.[0-9]{1,3}\.[0-9]{1,3}\.(?P<last>[0-9]{1,3})\b",
            Replacement::template("${first}.***.***.${last}"),
        ),
        rule(
            Category::UrlQueryParam,
            r#"(?P<sep>[?&])(?P<key>[A-Za-z0-9_.\[\]-]+)=[^&#\s"'\\]+"#,
            Replacement::template("${sep}${key}=***"),
        ),
        rule(
            Category::MacAddress,
            r"(?P<head>(?:[0-9A-Fa-f]{2}:){5})[0-9A-Fa-f]{2}",
            Replacement::template("${head}XX"),
        ),
        rule(
            Category::Timestamp,
            r"T[0-9]{2}:[0-9]{2}:[0-9]{2}",
            Replacement::template("T**:**:**"),
        ),
        rule(
            Category::GeoCoordinate,
            r#"(?P<lead>^|[\s"'(=])(?P<keep>[-+]?[0-9]{1,3}\.[0-9]{2})[0-9]+"#,
            Replacement::template("${lead}${keep}****"),
        ),
        rule(
            Category::Username,
            r#"(?i)(?P<label>\b(?:user_?name|user|login)(?:"\s*:\s*"|\s*[:=]\s*"?))(?P<first>[a-z0-9_])[a-z0-9_.-]+(?P<last>[a-z0-9_])(?P<tail>$|[^a-z0-9_.@-])"#,
            Replacement::template("${label}${first}*******${last}${tail}"),
        ),
        rule(
            Category::SocialHandle,
            r"(?P<lead>^|[^A-Za-z0-9_@.])@[A-Za-z0-9_]+",
            Replacement::template("${lead}@******"),
        ),
        rule(
            Category::FilePath,
            r#"(?P<lead>^|[\s"'=(,\[])(?P<dirs>(?:/[A-Za-z0-9._-]+)+)/"#,
            Replacement::Computed(mask_path_segments),
        ),
    ]
}
