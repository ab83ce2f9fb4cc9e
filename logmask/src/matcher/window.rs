//! Fixed-width, position-scanning matchers.
//!
//! The scanner visits every offset of the buffer in increasing order. At each
//! offset it tests a window of exactly `width` characters against an anchored
//! predicate and, on a match, splices the category's [`MaskTemplate`] into the
//! buffer. Scanning then continues at the next offset of the *rewritten*
//! buffer: the replaced region is not skipped, so text kept after the mask can
//! take part in a later match. Overlaps resolve by leftmost offset only.
//!
//! Two kinds of window are never candidates:
//! - one that opens with two [`MASK_CHAR`]s, i.e. starts inside a mask an
//!   earlier splice (from any window category) already wrote;
//! - one where the category's own mask token already follows the kept prefix.

use regex::Regex;

use super::FieldMatcher;
use crate::{
    category::Category,
    mask::{MASK_CHAR, MaskTemplate},
};

/// Scans a sliding window of fixed width and masks every offset that matches.
#[derive(Clone, Debug)]
pub struct WindowMatcher {
    category: Category,
    width: usize,
    predicate: Regex,
    case_insensitive: bool,
    template: MaskTemplate,
}

impl WindowMatcher {
    /// Builds a matcher whose predicate must match a whole window.
    ///
    /// `pattern` is anchored on both ends; do not include `^` or `$`.
    pub fn new(
        category: Category,
        width: usize,
        pattern: &str,
        template: MaskTemplate,
    ) -> Result<Self, regex::Error> {
        debug_assert!(template.resume() <= width);
        let predicate = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            category,
            width,
            predicate,
            case_insensitive: false,
            template,
        })
    }

    /// Tests an upper-cased copy of each window instead of the window itself.
    ///
    /// The replacement is still written into the original-case buffer.
    #[must_use]
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Number of characters tested at each offset.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The splice applied where a window matches.
    pub fn template(&self) -> MaskTemplate {
        self.template
    }

    fn window_matches(&self, window: &[char]) -> bool {
        if matches!(window, [MASK_CHAR, MASK_CHAR, ..]) {
            return false;
        }
        let candidate: String = window.iter().collect();
        if self.case_insensitive {
            self.predicate.is_match(&candidate.to_uppercase())
        } else {
            self.predicate.is_match(&candidate)
        }
    }
}

impl FieldMatcher for WindowMatcher {
    fn category(&self) -> Category {
        self.category
    }

    fn mask(&self, text: &str) -> String {
        let mut buf: Vec<char> = text.chars().collect();
        let mut start = 0;
        // The buffer length is re-read every iteration: splices resize it.
        while start < buf.len() {
            if let Some(window) = buf.get(start..start + self.width)
                && self.window_matches(window)
                && !self.template.is_applied_at(&buf, start)
            {
                self.template.apply_at(&mut buf, start);
            }
            start += 1;
        }
        buf.into_iter().collect()
    }
}

fn rule(category: Category, width: usize, pattern: &str, template: MaskTemplate) -> WindowMatcher {
    WindowMatcher::new(category, width, pattern, template).expect("built-in window pattern compiles")
}

/// The fixed-width matchers in pipeline order.
///
/// The 12-digit and mobile scanners come first so they claim ambiguous digit
/// runs before the narrower categories see them.
pub(crate) fn builtin() -> Vec<WindowMatcher> {
    const DAY: &str = "0?[1-9]|[12][0-9]|3[01]";
    const MONTH: &str = "0?[1-9]|1[012]";
    let date = format!(
        "(?:{DAY})[/-](?:{MONTH})[/-][0-9]{{4}}|[0-9]{{4}}[/-](?:{MONTH})[/-](?:{DAY})"
    );

    vec![
        rule(Category::NationalId, 12, "[0-9]{12}", MaskTemplate::new(0, "XXXXXXXX", 8)),
        rule(Category::Mobile, 10, "0?[6789][0-9]{9}", MaskTemplate::new(4, "XXXX", 8)),
        rule(
            Category::PermanentAccountNumber,
            10,
            "[A-Z]{3}[ABCFGHLJPTF][A-Z][0-9]{4}[A-Z]",
            MaskTemplate::new(1, "XXXXXXXX", 9),
        )
        .case_insensitive(),
        rule(Category::DateOfBirth, 10, &date, MaskTemplate::literal("XX/XX/XXXX", 10)),
        rule(Category::PostalCode, 6, "[1-9][0-9]{5}", MaskTemplate::new(1, "XXX", 5)),
        rule(
            Category::PassportNumber,
            8,
            "[A-PR-TV-WY][0-9]{7}",
            MaskTemplate::new(1, "XXXXXX", 7),
        )
        .case_insensitive(),
        rule(
            Category::TaxId,
            11,
            "[0-9]{3}-[0-9]{2}-[0-9]{4}",
            MaskTemplate::literal("XXX-XX-XXXX", 11),
        ),
        rule(
            Category::PaymentCard,
            19,
            "[0-9]{4}-?[0-9]{4}-?[0-9]{4}-?[0-9]{4}",
            MaskTemplate::new(4, "XXXX-XXXX-XXXX", 16),
        ),
        rule(Category::DriversLicense, 8, "[A-Z][0-9]{7}", MaskTemplate::new(1, "XXXXXXX", 7)),
        rule(Category::BankAccount, 18, "[0-9]{9,18}", MaskTemplate::new(3, "XXXXXXXXX", 12)),
        rule(
            Category::Iban,
            34,
            "[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}",
            MaskTemplate::new(4, "XXXXXXXXXXXXXXXXXXXXXX", 24),
        ),
        rule(
            Category::HealthInsuranceId,
            10,
            "[A-Z][0-9]{9}",
            MaskTemplate::new(1, "XXXXXXXXX", 10),
        ),
        rule(Category::EmployeeId, 8, "[A-Z]{2,4}[0-9]{3,5}", MaskTemplate::new(4, "XXXXX", 7)),
    ]
}
