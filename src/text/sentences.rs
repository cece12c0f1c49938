//! Sentence segmentation using punctuation and capitalization heuristics.
//!
//! A boundary is a `.`, `!`, or `?` followed by a whitespace run and then an
//! uppercase Latin or Cyrillic letter or a quote mark. Requiring the capital
//! avoids splitting on abbreviations and decimals followed by lowercase
//! continuations ("Mr. smith", "3.14 exactly"). The `regex` crate has no
//! lookaround, so this is a plain char scan.

fn ends_sentence(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

// А-Я excludes Ё, which sits outside the contiguous Cyrillic uppercase range
fn opens_sentence(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'А'..='Я' | 'Ё' | '"')
}

/// Split text into sentences.
///
/// Results are trimmed and never empty. Text without a boundary-matching
/// punctuation mark comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if ends_sentence(c) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            // At least one whitespace char, then a sentence opener
            if j > i + 1 && j < chars.len() && opens_sentence(chars[j].1) {
                let sentence = text[start..pos + c.len_utf8()].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = chars[j].0;
                i = j;
                continue;
            }
        }
        i += 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("Hello world. This is a test! Нет?");
        assert_eq!(sentences, vec!["Hello world.", "This is a test!", "Нет?"]);
    }

    #[test]
    fn test_no_split_before_lowercase() {
        // Abbreviation followed by lowercase stays together
        let sentences = split_sentences("Mr. smith went home. Then he slept.");
        assert_eq!(sentences, vec!["Mr. smith went home.", "Then he slept."]);
    }

    #[test]
    fn test_no_split_inside_decimals() {
        let sentences = split_sentences("Pi is 3.14 exactly.");
        assert_eq!(sentences, vec!["Pi is 3.14 exactly."]);
    }

    #[test]
    fn test_split_before_quote() {
        let sentences = split_sentences("He left. \"Stop!\" she said.");
        assert_eq!(sentences, vec!["He left.", "\"Stop!\" she said."]);
    }

    #[test]
    fn test_cyrillic_boundaries() {
        let sentences = split_sentences("Привет, мир. Это тест! Ёлка стояла.");
        assert_eq!(sentences, vec!["Привет, мир.", "Это тест!", "Ёлка стояла."]);
    }

    #[test]
    fn test_stacked_terminators() {
        let sentences = split_sentences("Really?! Yes.");
        assert_eq!(sentences, vec!["Really?!", "Yes."]);
    }

    #[test]
    fn test_newline_as_boundary_whitespace() {
        let sentences = split_sentences("First line.\nSecond line.");
        assert_eq!(sentences, vec!["First line.", "Second line."]);
    }

    #[test]
    fn test_no_punctuation_yields_whole_text() {
        let sentences = split_sentences("just some words with no ending");
        assert_eq!(sentences, vec!["just some words with no ending"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
    }
}
