//! Assigning a category to every word.
//!
//! Tagging never fails. Punctuation-only words are dropped, every other word
//! gets exactly one [`Category`]: the first lexicon set that lists it, or
//! [`Category::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::lexicon::Lexicon;
use crate::tokenizer::is_punctuation;

/// A word paired with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub category: Category,
}

impl Token {
    pub fn new(word: impl Into<String>, category: Category) -> Self {
        Self {
            word: word.into(),
            category,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.category)
    }
}

/// Returns `true` for words that carry no content: empty after tokenizing,
/// or made up of punctuation only.
pub fn is_punctuation_word(word: &str) -> bool {
    word.chars().all(is_punctuation)
}

/// Tag a sequence of normalized words.
///
/// Each token is built from its own word, so dropping punctuation shifts no
/// category onto a neighbouring word.
pub fn tag<I, S>(words: I, lexicon: &Lexicon) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref();
            if is_punctuation_word(word) {
                tracing::trace!(word, "dropping punctuation");
                return None;
            }
            let category = lexicon.categorize(word);
            tracing::trace!(word, %category, "tagged");
            Some(Token::new(word, category))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_simple_sentence() {
        let tokens = tag(tokenize("The cat ran."), &Lexicon::english());
        assert_eq!(
            tokens,
            vec![
                Token::new("the", Category::Determiner),
                Token::new("cat", Category::Noun),
                Token::new("ran", Category::IntransitiveVerb),
            ]
        );
    }

    #[test]
    fn test_punctuation_is_dropped_without_misalignment() {
        let tokens = tag(tokenize("the cat -- ran"), &Lexicon::english());
        assert_eq!(
            tokens,
            vec![
                Token::new("the", Category::Determiner),
                Token::new("cat", Category::Noun),
                Token::new("ran", Category::IntransitiveVerb),
            ]
        );
    }

    #[test]
    fn test_verb_in_both_sets_is_transitive() {
        let lexicon = Lexicon::english();
        assert!(lexicon.contains(Category::IntransitiveVerb, "saw"));
        assert!(lexicon.contains(Category::TransitiveVerb, "saw"));
        let tokens = tag(["saw"], &lexicon);
        assert_eq!(tokens[0].category, Category::TransitiveVerb);
    }

    #[test]
    fn test_unknown_words_fall_back() {
        let tokens = tag(["bob", "zorked"], &Lexicon::english());
        assert!(tokens.iter().all(|t| t.category == Category::Unknown));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new("cat", Category::Noun).to_string(), "cat/N");
    }
}
