//! Clock time domain logic.

use super::{PatternCategory, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Clock time pattern matcher.
///
/// Supports:
/// - 18:30, 23:59:59, 10:30 am (24-hour, suffix optional)
/// - 4:30 pm, 12:30:45 pm (12-hour, suffix required)
/// - 9am, 5pm (bare hour glued to the suffix)
///
/// Minutes and seconds must be two digits but are not checked against 60.
#[derive(Debug, Clone)]
pub struct TimeMatcher;

impl TimeMatcher {
    /// Creates a new time matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the regex pattern for clock times.
    ///
    /// Digits and whitespace are ASCII only.
    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(concat!(
                r"(?-u)",
                r"(?:2[0-3]|[01]?\d):\d{2}(?::\d{2})?(?:\s[ap]m)?",
                r"|(?:1[0-2]|0?[1-9]):\d{2}(?::\d{2})?\s[ap]m",
                r"|(?:1[0-2]|0?[1-9])[ap]m",
            ))
            .expect("Valid time regex")
        });
        &PATTERN
    }
}

impl Default for TimeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for TimeMatcher {
    fn category(&self) -> PatternCategory {
        PatternCategory::Time
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
