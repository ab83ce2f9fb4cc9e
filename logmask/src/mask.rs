//! Mask tokens and the splice template used by fixed-width matchers.
//!
//! A [`MaskTemplate`] describes how a matched window is rewritten: keep the
//! first `keep` characters, drop everything up to `resume`, and write the mask
//! token in between. The token may be shorter or longer than the span it
//! replaces, so a splice can resize the buffer.

/// Character used by the fixed-width matchers.
pub const MASK_CHAR: char = 'X';

/// Character used by the global pattern-replace matchers.
pub const PATTERN_MASK_CHAR: char = '*';

/// Literal replacement for every email address.
pub const MASKED_EMAIL: &str = "XXXXXX@XXX.XX";

/// Logged by the logging adapters in place of a value whose masking failed.
pub const MASKING_FAILED_PLACEHOLDER: &str = "[MASKING FAILED]";

/// Splice rule applied at the offset where a window matched.
///
/// Offsets are counted in Unicode scalar values from the match start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskTemplate {
    /// Leading characters of the match left in clear text.
    keep: usize,
    /// Token written after the kept prefix.
    mask: &'static str,
    /// Offset (from the match start) where the original text resumes.
    resume: usize,
}

impl MaskTemplate {
    /// Creates a template. `keep` must not exceed `resume`.
    #[must_use]
    pub const fn new(keep: usize, mask: &'static str, resume: usize) -> Self {
        assert!(keep <= resume, "kept prefix cannot extend past the resume offset");
        Self { keep, mask, resume }
    }

    /// Replaces the whole consumed span with a literal.
    #[must_use]
    pub const fn literal(mask: &'static str, consumed: usize) -> Self {
        Self::new(0, mask, consumed)
    }

    /// Leading characters of the match left in clear text.
    pub fn keep(&self) -> usize {
        self.keep
    }

    /// Token written after the kept prefix.
    pub fn mask(&self) -> &'static str {
        self.mask
    }

    /// Offset, from the match start, where the original text resumes.
    pub fn resume(&self) -> usize {
        self.resume
    }

    /// Returns `true` when `buf` already carries this template's token right
    /// after the kept prefix of a match starting at `start`.
    pub(crate) fn is_applied_at(&self, buf: &[char], start: usize) -> bool {
        let from = start + self.keep;
        let token_len = self.mask.chars().count();
        buf.get(from..from + token_len)
            .is_some_and(|span| span.iter().copied().eq(self.mask.chars()))
    }

    /// Rewrites the match starting at `start` in place.
    ///
    /// The caller guarantees that `start + resume <= buf.len()`, which holds
    /// whenever `resume` does not exceed the window width.
    pub(crate) fn apply_at(&self, buf: &mut Vec<char>, start: usize) {
        let from = start + self.keep;
        let to = (start + self.resume).min(buf.len());
        buf.splice(from..to, self.mask.chars());
    }
}

#[cfg(test)]
mod tests {
    use super::MaskTemplate;

    fn splice(template: MaskTemplate, text: &str, start: usize) -> String {
        let mut buf: Vec<char> = text.chars().collect();
        template.apply_at(&mut buf, start);
        buf.into_iter().collect()
    }

    #[test]
    fn keeps_prefix_and_resumes_after_consumed_span() {
        let template = MaskTemplate::new(4, "XXXX", 8);
        assert_eq!(splice(template, "9876543210", 0), "9876XXXX10");
    }

    #[test]
    fn shorter_token_shrinks_the_buffer() {
        let template = MaskTemplate::new(1, "XXX", 5);
        assert_eq!(splice(template, "a560001b", 1), "a5XXX01b");
    }

    #[test]
    fn literal_keeps_nothing() {
        let template = MaskTemplate::literal("XXX-XX-XXXX", 11);
        assert_eq!(template.keep(), 0);
        assert_eq!(template.mask(), "XXX-XX-XXXX");
        assert_eq!(template.resume(), 11);
    }

    #[test]
    fn literal_replaces_whole_span() {
        let template = MaskTemplate::literal("XX/XX/XXXX", 10);
        assert_eq!(splice(template, "on 01/01/1990.", 3), "on XX/XX/XXXX.");
    }

    #[test]
    fn detects_token_already_in_place() {
        let template = MaskTemplate::new(1, "XXX", 5);
        let masked: Vec<char> = "5XXX01".chars().collect();
        assert!(template.is_applied_at(&masked, 0));

        let clear: Vec<char> = "560001".chars().collect();
        assert!(!template.is_applied_at(&clear, 0));

        // Token would run past the end of the buffer.
        let short: Vec<char> = "5XX".chars().collect();
        assert!(!template.is_applied_at(&short, 0));
    }

    #[test]
    fn splice_handles_multibyte_neighbours() {
        let template = MaskTemplate::new(0, "XXXXXXXX", 8);
        assert_eq!(
            splice(template, "é123456789012é", 1),
            "éXXXXXXXX9012é"
        );
    }
}
