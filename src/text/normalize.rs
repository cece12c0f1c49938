//! Whitespace normalization for raw extracted text.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize whitespace while preserving paragraph structure.
///
/// Collapses space/tab runs to a single space, converts `\r\n` and `\r` line
/// endings to `\n`, trims every line, and collapses three or more consecutive
/// newlines down to the two that mark a paragraph break. Idempotent.
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = SPACE_RUNS.replace_all(&text, " ");

    // Lines must be trimmed before collapsing newline runs, or runs broken up
    // by trailing spaces survive the first pass.
    let trimmed: Vec<&str> = text.lines().map(str::trim).collect();
    collapse_blank_lines(&trimmed.join("\n"))
}

/// Collapse 3+ newline runs to a paragraph break and trim the edges.
///
/// Also used by the pipeline driver after the line filters, which can leave
/// fresh blank-line runs behind.
pub(crate) fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUNS.replace_all(text, "\n\n").trim().to_string()
}
