//! Splitting sentences into normalized words.
//!
//! Each whitespace-delimited piece becomes one word: surrounding ASCII
//! punctuation is stripped and the rest is lowercased. Punctuation inside a
//! word (`don't`, `e-mail`) is kept. A piece made only of punctuation becomes
//! an empty word; the tagger drops those, the tokenizer never does.

/// The characters stripped from either end of a word.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Returns `true` if `c` is one of the [`PUNCTUATION`] characters.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Strip surrounding punctuation from a single piece and lowercase it.
pub fn normalize(piece: &str) -> String {
    piece.trim_matches(is_punctuation).to_lowercase()
}

/// Split `text` on whitespace and normalize every piece.
///
/// The result has one entry per whitespace-delimited piece of the input.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_sentence() {
        assert_eq!(tokenize("The cat ran."), vec!["the", "cat", "ran"]);
    }

    #[test]
    fn test_inner_punctuation_is_kept() {
        assert_eq!(tokenize("\"Don't\" stop!"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_pure_punctuation_piece_becomes_empty() {
        assert_eq!(tokenize("The cat ran ."), vec!["the", "cat", "ran", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }

    #[test]
    fn test_punctuation_constant_matches_predicate() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        assert!(PUNCTUATION.chars().all(is_punctuation));
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation(' '));
    }
}
