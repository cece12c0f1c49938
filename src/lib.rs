//! bookchunk - turn raw extracted book text into speech-synthesis-ready chunks.
//!
//! The input is a single UTF-8 string already pulled out of its source format
//! by an external extractor. The pipeline normalizes whitespace, strips
//! extraction artifacts (page numbers, running headers), optionally strips
//! publishing boilerplate (ISBN/copyright lines, tables of contents), and cuts
//! the surviving text into chunks that fit a per-engine character budget while
//! breaking at sentence, clause, or word boundaries - never mid-token.
//!
//! The main entry point is [`preprocess`]; the individual passes are exposed
//! under [`text`] for callers that want to run them separately.

pub mod config;
pub mod error;
pub mod text;

pub use error::{PreprocessError, Result};
pub use text::{PreprocessOptions, preprocess};
