//! Domain models and business logic for pattern matching.
//!
//! This module contains the text normalizer and the three fixed pattern
//! families (dates, clock times, weekday names) used to pull tokens out of
//! free-form text.

pub mod date;
pub mod day;
pub mod normalize;
pub mod time;

pub use date::DateMatcher;
pub use day::DayMatcher;
pub use normalize::normalize;
pub use time::TimeMatcher;

use regex::Regex;
use std::fmt;

/// A contiguous span of canonical text accepted by a category's rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Matched text.
    pub text: String,
}

impl Match {
    fn from_regex(m: regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        }
    }

    /// Returns true if the two spans share at least one byte.
    pub fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The three independent extraction rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    Date,
    Time,
    Day,
}

impl PatternCategory {
    /// All categories in presentation order.
    pub const ALL: [PatternCategory; 3] = [Self::Date, Self::Time, Self::Day];

    /// Human-readable label used when presenting results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Day => "Day of the week",
        }
    }

    /// Returns the matcher backing this category.
    pub fn matcher(self) -> &'static dyn PatternMatcher {
        static DATE: DateMatcher = DateMatcher;
        static TIME: TimeMatcher = TimeMatcher;
        static DAY: DayMatcher = DayMatcher;

        match self {
            Self::Date => &DATE,
            Self::Time => &TIME,
            Self::Day => &DAY,
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for pattern matching strategies.
///
/// Implementations only supply the compiled rule; scanning is shared. The
/// text handed to these methods is expected to be canonical (see
/// [`normalize`]), since the rules are written in lowercase only.
pub trait PatternMatcher: Send + Sync {
    fn category(&self) -> PatternCategory;

    fn pattern(&self) -> &Regex;

    /// Leftmost non-overlapping scan, resuming right after each match.
    fn find_all(&self, text: &str) -> Vec<Match> {
        self.pattern().find_iter(text).map(Match::from_regex).collect()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }
}
