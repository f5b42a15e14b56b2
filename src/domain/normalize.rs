//! Canonical search form for input text.

/// Lowercases ASCII letters and deletes every comma.
///
/// Non-ASCII characters pass through untouched, so the result is never
/// longer than the input.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c != ',')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
