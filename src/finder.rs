//! Matching session over a single input string.
//!
//! A [`PatternFinder`] normalizes its input once and then answers any number
//! of extraction queries against that canonical text. Every query rescans
//! from the beginning and returns freshly owned strings.

use crate::domain::{normalize, Match, PatternCategory};
use tracing::{debug, trace};

/// Results of one category for one session, as handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatches {
    /// Rule family these matches came from.
    pub category: PatternCategory,
    /// Matched text in order of appearance.
    pub matches: Vec<String>,
}

impl CategoryMatches {
    /// Presentation label for this category.
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Returns true if the category found nothing.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Finds dates, times and weekday names in a string.
///
/// On construction the input is lowercased and its commas are removed; the
/// caller's string is never borrowed past `new`.
///
/// # Example
///
/// ```
/// use datefinder::PatternFinder;
///
/// let finder = PatternFinder::new("See you on Sunday at 10:30 am.");
/// assert_eq!(finder.extract_times(), vec!["10:30 am"]);
/// assert_eq!(finder.extract_days(), vec!["sunday"]);
/// assert!(finder.extract_dates().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFinder {
    canonical: String,
}

impl PatternFinder {
    /// Creates a session over the canonical form of `text`.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            canonical: normalize(text.as_ref()),
        }
    }

    /// The lowercased, comma-free text all queries run against.
    pub fn canonical_text(&self) -> &str {
        &self.canonical
    }

    /// All matches of `category`, with their spans in canonical text.
    pub fn find(&self, category: PatternCategory) -> Vec<Match> {
        let found = category.matcher().find_all(&self.canonical);
        debug!(category = %category, count = found.len(), "scanned input");
        for m in &found {
            trace!(category = %category, start = m.start, end = m.end, text = %m.text, "match");
        }
        found
    }

    /// Matched text of `category`, in order of appearance.
    pub fn extract(&self, category: PatternCategory) -> Vec<String> {
        self.find(category).into_iter().map(|m| m.text).collect()
    }

    /// Dates, e.g. `05/12/2022`.
    pub fn extract_dates(&self) -> Vec<String> {
        self.extract(PatternCategory::Date)
    }

    /// Clock times, e.g. `10:30 am`.
    pub fn extract_times(&self) -> Vec<String> {
        self.extract(PatternCategory::Time)
    }

    /// Weekday names, e.g. `monday`.
    pub fn extract_days(&self) -> Vec<String> {
        self.extract(PatternCategory::Day)
    }

    /// Date, time and weekday results, in that order.
    pub fn report(&self) -> Vec<CategoryMatches> {
        self.report_for(&PatternCategory::ALL)
    }

    /// Results for the given categories only, in the order given.
    pub fn report_for(&self, categories: &[PatternCategory]) -> Vec<CategoryMatches> {
        categories
            .iter()
            .map(|&category| CategoryMatches {
                category,
                matches: self.extract(category),
            })
            .collect()
    }
}
