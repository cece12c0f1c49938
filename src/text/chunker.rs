//! Greedy boundary-aware chunking under a character budget.

use log::debug;

use super::sentences::split_sentences;
use crate::error::{PreprocessError, Result};

/// Greedy accumulator shared by the sentence, clause, and word tiers.
///
/// Pieces are joined with single spaces; when appending the next piece would
/// push the buffer past `max_chars`, the buffer is flushed as a finished
/// chunk. A piece longer than the budget ends up alone in a chunk - the
/// caller decides whether to break it down further first.
struct Packer {
    max_chars: usize,
    buf: String,
    buf_chars: usize,
    chunks: Vec<String>,
}

impl Packer {
    fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            buf: String::new(),
            buf_chars: 0,
            chunks: Vec::new(),
        }
    }

    fn push(&mut self, piece: &str) {
        let piece_chars = char_len(piece);
        if self.buf.is_empty() {
            self.buf.push_str(piece);
            self.buf_chars = piece_chars;
        } else if self.buf_chars + piece_chars + 1 <= self.max_chars {
            self.buf.push(' ');
            self.buf.push_str(piece);
            self.buf_chars += piece_chars + 1;
        } else {
            self.flush();
            self.buf.push_str(piece);
            self.buf_chars = piece_chars;
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.chunks.push(std::mem::take(&mut self.buf));
            self.buf_chars = 0;
        }
    }

    /// Append already-finished chunks, flushing the buffer first so the
    /// output keeps reading order.
    fn emit_all(&mut self, ready: Vec<String>) {
        self.flush();
        self.chunks.extend(ready);
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split text into chunks of at most `max_chars` characters, breaking at
/// sentence boundaries where possible.
///
/// Sentences longer than the budget fall back to clause boundaries, then word
/// boundaries. The single exception to the budget is a lone token longer than
/// `max_chars`, which is emitted unmodified rather than cut mid-word.
///
/// # Errors
///
/// Returns [`PreprocessError::InvalidBudget`] when `max_chars` is zero.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Result<Vec<String>> {
    if max_chars == 0 {
        return Err(PreprocessError::InvalidBudget);
    }

    let mut packer = Packer::new(max_chars);
    for sentence in split_sentences(text) {
        if char_len(&sentence) > max_chars {
            packer.emit_all(split_long_sentence(&sentence, max_chars));
        } else {
            packer.push(&sentence);
        }
    }

    let chunks = packer.finish();
    debug!(
        "chunked {} chars into {} chunks (budget {})",
        char_len(text),
        chunks.len(),
        max_chars
    );
    Ok(chunks)
}

/// Break an over-budget sentence at clause boundaries, falling back to word
/// boundaries for any clause that is still too long.
fn split_long_sentence(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut packer = Packer::new(max_chars);
    for clause in split_clauses(sentence) {
        if char_len(clause) > max_chars {
            packer.flush();
            for word in clause.split_whitespace() {
                packer.push(word);
            }
            packer.flush();
        } else {
            packer.push(clause);
        }
    }
    packer.finish()
}

fn is_clause_boundary(c: char) -> bool {
    matches!(c, ',' | ';' | ':' | '-' | '—')
}

/// Split at whitespace that follows clause punctuation. The punctuation stays
/// with the preceding fragment and the whitespace run is consumed.
fn split_clauses(sentence: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut iter = sentence.char_indices().peekable();

    while let Some((pos, c)) = iter.next() {
        if c.is_whitespace() && prev.is_some_and(is_clause_boundary) {
            parts.push(&sentence[start..pos]);
            let mut next_start = pos + c.len_utf8();
            while let Some(&(p, w)) = iter.peek() {
                if !w.is_whitespace() {
                    break;
                }
                next_start = p + w.len_utf8();
                iter.next();
            }
            start = next_start;
        }
        prev = Some(c);
    }
    if start < sentence.len() {
        parts.push(&sentence[start..]);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = split_into_chunks("Hello world. How are you?", 280).unwrap();
        assert_eq!(chunks, vec!["Hello world. How are you?"]);
    }

    #[test]
    fn test_packs_sentences_up_to_budget() {
        // 5 + 1 + 5 == 11: exactly at the budget, one chunk
        let chunks = split_into_chunks("Aaaa. Bbbb.", 11).unwrap();
        assert_eq!(chunks, vec!["Aaaa. Bbbb."]);

        // One short of the joined length: two chunks
        let chunks = split_into_chunks("Aaaa. Bbbb.", 10).unwrap();
        assert_eq!(chunks, vec!["Aaaa.", "Bbbb."]);
    }

    #[test]
    fn test_budget_respected_over_many_sentences() {
        let text = "First sentence. Second sentence. Third sentence. Fourth sentence. \
                    Fifth sentence. Sixth sentence. Seventh sentence. Eighth sentence.";
        let chunks = split_into_chunks(text, 50).unwrap();
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 50, "chunk too long: {chunk:?}");
        }
    }

    #[test]
    fn test_zero_budget_is_an_error() {
        assert!(matches!(
            split_into_chunks("Some text.", 0),
            Err(PreprocessError::InvalidBudget)
        ));
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_into_chunks("", 100).unwrap().is_empty());
        assert!(split_into_chunks("  \n ", 100).unwrap().is_empty());
    }

    #[test]
    fn test_long_sentence_splits_at_clauses() {
        let text = "alpha beta gamma, delta epsilon zeta, eta theta";
        let chunks = split_into_chunks(text, 20).unwrap();
        assert_eq!(
            chunks,
            vec!["alpha beta gamma,", "delta epsilon zeta,", "eta theta"]
        );
    }

    #[test]
    fn test_long_clause_splits_at_words() {
        let text = "one two three four five six seven";
        let chunks = split_into_chunks(text, 10).unwrap();
        assert_eq!(chunks, vec!["one two", "three four", "five six", "seven"]);
    }

    #[test]
    fn test_oversized_word_passes_through() {
        let token = "x".repeat(2000);
        let chunks = split_into_chunks(&token, 500).unwrap();
        assert_eq!(chunks, vec![token]);
    }

    #[test]
    fn test_oversized_word_between_normal_words() {
        let token = "y".repeat(30);
        let text = format!("aa bb {token} cc dd");
        let chunks = split_into_chunks(&text, 10).unwrap();
        assert_eq!(chunks, vec!["aa bb".to_string(), token, "cc dd".to_string()]);
    }

    #[test]
    fn test_order_is_preserved_across_tiers() {
        let long = format!("start here, {} middle, end here", "w".repeat(40));
        let text = format!("Before. {long} After all.");
        let chunks = split_into_chunks(&text, 25).unwrap();
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect();
        let expected: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, expected);
    }

    #[test]
    fn test_split_clauses() {
        assert_eq!(
            split_clauses("one, two; three: four - five"),
            vec!["one,", "two;", "three:", "four -", "five"]
        );
        assert_eq!(split_clauses("no boundaries here"), vec!["no boundaries here"]);
    }

    #[test]
    fn test_hyphenated_words_stay_whole() {
        // A hyphen not followed by whitespace is not a clause boundary
        assert_eq!(split_clauses("well-known fact"), vec!["well-known fact"]);
    }
}
