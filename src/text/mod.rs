//! Text preparation pipeline for speech synthesis.
//!
//! Passes run strictly one-directional: normalize whitespace, strip
//! extraction artifacts, optionally strip publishing boilerplate, then cut
//! the surviving text into budget-sized chunks.

mod artifacts;
mod boilerplate;
mod chunker;
mod normalize;
mod sentences;

pub use artifacts::strip_artifacts;
pub use boilerplate::strip_boilerplate;
pub use chunker::split_into_chunks;
pub use normalize::normalize;
pub use sentences::split_sentences;

use crate::error::Result;
use log::debug;

/// Options for a single preprocessing run.
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    /// Maximum characters per chunk.
    pub max_chars: usize,
    /// Strip publishing boilerplate and TOC-like blocks. Off by default
    /// since the heuristics can over-trim legitimate content.
    pub filter_meta: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            max_chars: 1000,
            filter_meta: false,
        }
    }
}

/// Run the full pipeline: clean raw extracted text and cut it into
/// synthesis-ready chunks.
///
/// An input that is empty, or that the filters reduce to nothing, yields an
/// empty vector - no work to do, not an error.
///
/// # Errors
///
/// Returns [`crate::PreprocessError::InvalidBudget`] when
/// `options.max_chars` is zero.
pub fn preprocess(text: &str, options: &PreprocessOptions) -> Result<Vec<String>> {
    let text = normalize(text);
    let text = strip_artifacts(&text);
    let text = if options.filter_meta {
        strip_boilerplate(&text)
    } else {
        text
    };
    // Dropped lines can leave fresh blank-line runs behind
    let text = normalize::collapse_blank_lines(&text);
    debug!("preprocessing {} chars after filtering", text.chars().count());

    split_into_chunks(&text, options.max_chars)
}
