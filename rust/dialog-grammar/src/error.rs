//! Error types for tagging, parsing and lexicon loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

/// The construct a [`GrammarError::GrammarViolation`] was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// No noun phrase could start at the current token.
    NounPhrase,
    /// The simple verb phrase found no verb after its leading adverbs.
    Verb,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::NounPhrase => write!(f, "NP"),
            Expected::Verb => write!(f, "verb"),
        }
    }
}

/// Errors that can occur while parsing a tagged token stream.
///
/// Positions are zero-based token indices into the tagged stream, which
/// excludes dropped punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A token was required but the cursor is past the last token.
    #[error("unexpected end of sentence at token {position}")]
    StreamExhausted { position: usize },

    /// The token at the cursor has a different category than required.
    #[error("expected {expected} at token {position} but found {found} '{word}'")]
    CategoryMismatch {
        expected: Category,
        found: Category,
        word: String,
        position: usize,
    },

    /// No production of the grammar applies at the cursor.
    #[error("{expected} expected at token {position}")]
    GrammarViolation { expected: Expected, position: usize },

    /// A sentence would nest deeper than the configured limit.
    #[error("sentences nest deeper than {limit} at token {position}")]
    TooDeep { limit: usize, position: usize },

    /// The sentence parsed but tokens remain after it.
    #[error("{remaining} unparsed token(s) starting at token {position}")]
    TrailingTokens { position: usize, remaining: usize },
}

impl GrammarError {
    /// The token position the error refers to.
    pub fn position(&self) -> usize {
        match self {
            GrammarError::StreamExhausted { position }
            | GrammarError::CategoryMismatch { position, .. }
            | GrammarError::GrammarViolation { position, .. }
            | GrammarError::TooDeep { position, .. }
            | GrammarError::TrailingTokens { position, .. } => *position,
        }
    }
}

/// Errors that can occur while building or loading a [`crate::Lexicon`].
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the {} category is the fallback and cannot hold words", Category::Unknown)]
    CatchAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message_names_the_construct() {
        let error = GrammarError::GrammarViolation {
            expected: Expected::NounPhrase,
            position: 0,
        };
        assert_eq!(error.to_string(), "NP expected at token 0");
    }

    #[test]
    fn test_mismatch_message() {
        let error = GrammarError::CategoryMismatch {
            expected: Category::Noun,
            found: Category::IntransitiveVerb,
            word: "ran".into(),
            position: 1,
        };
        assert_eq!(error.to_string(), "expected N at token 1 but found IV 'ran'");
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_too_deep_message() {
        let error = GrammarError::TooDeep {
            limit: 256,
            position: 1530,
        };
        assert_eq!(error.to_string(), "sentences nest deeper than 256 at token 1530");
        assert_eq!(error.position(), 1530);
    }
}
