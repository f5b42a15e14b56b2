//! Plain-text presentation of extraction results.

use crate::domain::PatternCategory;
use crate::finder::PatternFinder;

/// Line printed after each input's block.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Formats a label and its items as `label = [a, b, c]`.
pub fn format_matches<S: AsRef<str>>(label: &str, items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("{} = [{}]", label, joined.join(", "))
}

/// Renders the full output block for one input string.
///
/// Only `categories` are listed, numbered by their position among all
/// categories so that `(3) Day of the week` keeps its number when shown
/// alone.
pub fn render_report(input: &str, finder: &PatternFinder, categories: &[PatternCategory]) -> String {
    let mut lines = vec![
        format!("[INFO] Input: {}", input),
        "[INFO] Output:".to_string(),
    ];

    for result in finder.report_for(categories) {
        let number = PatternCategory::ALL
            .iter()
            .position(|&c| c == result.category)
            .map_or(0, |i| i + 1);
        let label = format!("\t({}) {}", number, result.label());
        lines.push(format_matches(&label, &result.matches));
    }

    lines.push(SEPARATOR.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
