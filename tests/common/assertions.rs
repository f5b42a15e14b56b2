//! Custom assertions for extraction testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use datefinder::{Match, PatternCategory, PatternFinder};

/// Asserts that one category extracts exactly `expected` from `input`.
///
/// # Panics
/// Panics with the canonical text when the results differ.
pub fn assert_extracts(input: &str, category: PatternCategory, expected: &[&str]) {
    let finder = PatternFinder::new(input);
    let actual = finder.extract(category);
    assert_eq!(
        actual,
        expected,
        "{} mismatch for input '{}' (canonical: '{}')",
        category,
        input,
        finder.canonical_text()
    );
}

/// Asserts that matches are sorted by start offset and never overlap.
///
/// # Panics
/// Panics on the first out-of-order or overlapping pair.
pub fn assert_ordered_disjoint(matches: &[Match]) {
    for pair in matches.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "Matches out of order or overlapping: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that each match's text is the canonical text at its span.
///
/// # Panics
/// Panics if a span does not line up with its text.
pub fn assert_spans_consistent(canonical: &str, matches: &[Match]) {
    for m in matches {
        assert_eq!(
            &canonical[m.start..m.end],
            m.text,
            "Span {}..{} does not match text '{}'",
            m.start,
            m.end,
            m.text
        );
    }
}
