//! Extract dates, clock times and weekday names from free-form text.
//!
//! Matching is purely syntactic: tokens come back as the substrings that
//! look like dates, times or days, without being parsed into calendar
//! values or checked for range.
//!
//! # Architecture
//!
//! - [`domain`]: Normalizer and the three fixed pattern families
//! - [`finder`]: Matching session over one input string
//! - [`input`]: Input acquisition (arguments, files, demo set)
//! - [`report`]: Plain-text rendering of results
//! - [`error`]: Errors at the input boundary
//!
//! # Quick Start
//!
//! ```
//! use datefinder::PatternFinder;
//!
//! let finder = PatternFinder::new("I work from 9am to 5pm, Monday 16/05/2022.");
//! assert_eq!(finder.extract_times(), vec!["9am", "5pm"]);
//! assert_eq!(finder.extract_dates(), vec!["16/05/2022"]);
//! assert_eq!(finder.extract_days(), vec!["monday"]);
//! ```
//!
//! # Using a Matcher Directly
//!
//! Matchers expect canonical text, so normalize first:
//!
//! ```
//! use datefinder::domain::{normalize, DateMatcher, PatternMatcher};
//!
//! let text = normalize("Released 12-07-2008 (12th of July, 2008)");
//! let dates = DateMatcher::new().extract_all(&text);
//! assert_eq!(dates, vec!["12-07-2008", "12th of july 2008"]);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod finder;
pub mod input;
pub mod report;

// Re-exports for convenient access
pub use domain::{
    normalize, DateMatcher, DayMatcher, Match, PatternCategory, PatternMatcher, TimeMatcher,
};
pub use error::{FinderError, FinderResult};
pub use finder::{CategoryMatches, PatternFinder};
pub use input::{build_input, read_input_file, DEMO_INPUTS};
pub use report::{format_matches, render_report, SEPARATOR};
