//! Removal of publishing boilerplate: ISBN/copyright lines, publisher
//! phrases, bare URLs, and table-of-contents entries.
//!
//! These heuristics can over-trim legitimate prose (a novel about publishing,
//! say), so the pass is opt-in via `filter_meta`.

use once_cell::sync::Lazy;
use regex::Regex;

static ISBN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^ISBN[\s:\-]").unwrap());

static COPYRIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(©|\(c\)|Copyright)\s").unwrap());

static PUBLISHER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(All rights reserved|Published by|Printed in|First (edition|published)|Все права защищены|Издательство|Издано|Отпечатано)",
    )
    .unwrap()
});

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(https?://|www\.)\S+$").unwrap());

// "Chapter 1 .......... 15" and dashed/ellipsis variants
static TOC_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.{1,60}[.\-·…]{4,}\s*\d+\s*$").unwrap());

static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*$").unwrap());

const MIN_TOC_RUN: usize = 5;
const MAX_TOC_LINE_CHARS: usize = 60;

/// Strip publishing boilerplate from text.
///
/// Two passes: drop individual boilerplate-shaped lines, then drop runs of
/// 5+ consecutive short lines ending in a number (a dense list of numbered
/// entries reads as a table of contents, not prose). Shorter runs are kept.
pub fn strip_boilerplate(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| !is_boilerplate_line(line.trim()))
        .collect();

    drop_toc_blocks(&kept).join("\n")
}

fn is_boilerplate_line(trimmed: &str) -> bool {
    ISBN.is_match(trimmed)
        || COPYRIGHT.is_match(trimmed)
        || PUBLISHER.is_match(trimmed)
        || URL.is_match(trimmed)
        || TOC_ENTRY.is_match(trimmed)
}

fn drop_toc_blocks<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut out = Vec::with_capacity(lines.len());
    let mut run: Vec<&str> = Vec::new();

    for &line in lines {
        let trimmed = line.trim();
        let toc_like = !trimmed.is_empty()
            && trimmed.chars().count() < MAX_TOC_LINE_CHARS
            && TRAILING_NUMBER.is_match(trimmed);

        if toc_like {
            run.push(line);
        } else {
            if run.len() < MIN_TOC_RUN {
                out.append(&mut run);
            } else {
                run.clear();
            }
            // The line that ends a run is always kept
            out.push(line);
        }
    }
    if run.len() < MIN_TOC_RUN {
        out.append(&mut run);
    }

    out
}
