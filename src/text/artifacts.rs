//! Removal of extraction artifacts: page numbers and running headers.

use once_cell::sync::Lazy;
use regex::Regex;

// Bare page number, optionally dash-decorated: "42", "- 42 -"
static PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\s*\d+\s*-?$").unwrap());

/// Drop page-number-only lines and very short non-alphabetic lines left
/// behind by extraction (stray symbols, running headers/footers).
///
/// Blank lines pass through untouched so paragraph breaks survive filtering.
pub fn strip_artifacts(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return true;
            }
            if PAGE_NUMBER.is_match(trimmed) {
                return false;
            }
            if trimmed.chars().count() < 3 && !trimmed.chars().all(char::is_alphabetic) {
                return false;
            }
            true
        })
        .collect();

    kept.join("\n")
}
