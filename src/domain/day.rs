//! Weekday name domain logic.

use super::{PatternCategory, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Weekday name pattern matcher.
///
/// Each weekday is written as its three-letter stem followed by an optional
/// tail, so a full name is consumed whole and never yields a second,
/// shorter match. Stems also match inside longer words (`saturated`).
#[derive(Debug, Clone)]
pub struct DayMatcher;

impl DayMatcher {
    /// Creates a new weekday matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the regex pattern for weekday names.
    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"mon(?:day)?|tue(?:sday)?|wed(?:nesday)?|thu(?:rsday)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?",
            )
            .expect("Valid weekday regex")
        });
        &PATTERN
    }
}

impl Default for DayMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for DayMatcher {
    fn category(&self) -> PatternCategory {
        PatternCategory::Day
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
