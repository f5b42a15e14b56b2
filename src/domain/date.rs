//! Calendar date domain logic.
//!
//! Dates are recognised purely by shape. Day, month and year groups are
//! bounded in width but never range-checked, so `45/99/2022` is accepted.

use super::{PatternCategory, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Calendar date pattern matcher.
///
/// Supports three layouts (tried in this order at each position):
/// - 12-07-2008, 05/12/2022, 12.5.22, 3rd/1/23
/// - 12th of july 2008, 2-jan-2023, 6 jan-23, 8 apr 23
/// - 2022-10-25, 2023-09-1
#[derive(Debug, Clone)]
pub struct DateMatcher;

impl DateMatcher {
    /// Creates a new date matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the regex pattern for dates.
    ///
    /// Full month names are listed before their abbreviations so that
    /// `january` is never cut short at `jan`. Unicode classes are off, so
    /// `\d` and `\s` only accept ASCII digits and whitespace.
    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(concat!(
                r"(?-u)",
                r"\d{1,2}(?:st|nd|rd|th)?[./-]\d{1,2}[./-]\d{2,4}",
                r"|\d{1,2}(?:st|nd|rd|th)?[\s-]?(?:of )?",
                r"(?:january|february|march|april|may|june|july|august|september|october|november|december",
                r"|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)",
                r"\s?-?\d{2,4}",
                r"|\d{4}-\d{1,2}-\d{1,2}",
            ))
            .expect("Valid date regex")
        });
        &PATTERN
    }
}

impl Default for DateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for DateMatcher {
    fn category(&self) -> PatternCategory {
        PatternCategory::Date
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
