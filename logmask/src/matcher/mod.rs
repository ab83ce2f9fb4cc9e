//! Field matchers: one recognise-and-mask rule per sensitive-data category.
//!
//! Two strategies exist:
//!
//! - **`window`**: fixed-width scanners that test a sliding window at every
//!   buffer offset and splice a [`MaskTemplate`](crate::MaskTemplate) in
//!   place, continuing over the rewritten buffer.
//! - **`pattern`**: global pattern-replace matchers backed by one
//!   `Regex::replace_all` pass.
//!
//! **`custom`** holds the caller-supplied escape hatch, which is a global
//! pattern-replace matcher compiled at runtime.

mod custom;
mod pattern;
mod window;

pub use custom::{CustomMatcher, CustomPattern};
pub use pattern::{PatternMatcher, Replacement};
pub use window::WindowMatcher;

use crate::category::Category;

/// A pure, total text transformation for one category.
///
/// Implementations must not re-match their own mask output: running `mask`
/// twice yields the same text as running it once.
pub trait FieldMatcher: Send + Sync {
    /// The category this matcher masks.
    fn category(&self) -> Category;

    /// Returns `text` with every recognised occurrence masked.
    fn mask(&self, text: &str) -> String;
}

/// Every built-in matcher in pipeline order: all window scanners, then all
/// global pattern matchers.
pub(crate) fn builtin() -> Vec<Box<dyn FieldMatcher>> {
    let mut matchers: Vec<Box<dyn FieldMatcher>> = Vec::new();
    for matcher in window::builtin() {
        matchers.push(Box::new(matcher));
    }
    for matcher in pattern::builtin() {
        matchers.push(Box::new(matcher));
    }
    matchers
}
