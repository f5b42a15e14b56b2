//! Input acquisition.
//!
//! Collects the strings to scan, either from the command line, from a text
//! file (one input per line), or from the built-in demonstration set.

use crate::error::{FinderError, FinderResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Sentences used when no input is supplied.
pub const DEMO_INPUTS: [&str; 20] = [
    "The first version was released on 12-07-2008 (12th of july 2008).",
    "Next Release will might come on 12 July 2009.",
    "The due date for payment is 2023-09-1.",
    "The date on which the Constitution of Poland came into effect on 17 october 1997.",
    "The meeting is scheduled for 05/12/2022.",
    "The lunar eclipse will occur on Monday, 16/05/2022.",
    "The solar eclipse will occur on 2022-10-25.",
    "The event is on 2-Jan-2023.",
    "The marathon is on 3rd Jan 2023 (Tue).",
    "The festival is on 4th january 23.",
    "The concert is on 5-may-19 (5th may 19).",
    "The exhibition is on 6 jan-23.",
    "The fair is on 7 Jan-13.",
    "The event is on 8 apr 23 (8th of april 2023).",
    "See you on Sunday at 10:30 am.",
    "See you on Tuesday at 18:30.",
    "I work from 9am to to 5pm and he works from 8:00 am to 4:30 pm.",
    "The meeting is scheduled for Wednesday, 3rd June 2023 at 3:30 pm.",
    "The webinar begins at 2:00 pm on 5th August 2023.",
    "The workshop is on Thursday, 6th September 2023 at 4:00 pm.",
];

/// Returns `args` unchanged, or the demonstration set when `args` is empty.
pub fn build_input(args: Vec<String>) -> Vec<String> {
    if args.is_empty() {
        debug!("no inputs given, using {} demo sentences", DEMO_INPUTS.len());
        return DEMO_INPUTS.iter().map(|s| s.to_string()).collect();
    }
    args
}

/// Reads one input per non-blank line of a UTF-8 text file.
pub fn read_input_file(path: &Path) -> FinderResult<Vec<String>> {
    if path.as_os_str().is_empty() {
        return Err(FinderError::InvalidInput {
            parameter: "file".to_string(),
            reason: "path is empty".to_string(),
        });
    }

    let bytes = fs::read(path).map_err(|source| FinderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| FinderError::InvalidEncoding {
        path: path.to_path_buf(),
        reason: e.utf8_error().to_string(),
    })?;

    let lines: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), count = lines.len(), "read inputs from file");
    Ok(lines)
}
