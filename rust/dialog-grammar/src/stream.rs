//! The tagged token sequence and its read cursor.

use crate::category::Category;
use crate::error::GrammarError;
use crate::tagger::Token;

/// Tagged tokens plus a forward cursor.
///
/// The cursor only moves backwards through [`TokenStream::restore`], and only
/// to a position previously obtained from [`TokenStream::position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// The current cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to a saved position.
    pub fn restore(&mut self, position: usize) {
        debug_assert!(position <= self.cursor, "restore may not move the cursor forward");
        self.cursor = position;
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// The tokens not consumed yet.
    pub fn remaining(&self) -> &[Token] {
        self.tokens.get(self.cursor..).unwrap_or_default()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Check the category of the current token without consuming it.
    ///
    /// Fails with [`GrammarError::StreamExhausted`] at the end of input. Use
    /// [`TokenStream::next_is`] where running out of tokens is acceptable.
    pub fn matches(&self, category: Category) -> Result<bool, GrammarError> {
        self.peek()
            .map(|token| token.category == category)
            .ok_or(GrammarError::StreamExhausted {
                position: self.cursor,
            })
    }

    /// Like [`TokenStream::matches`], but `false` at the end of input.
    pub fn next_is(&self, category: Category) -> bool {
        self.peek().is_some_and(|token| token.category == category)
    }

    /// Take the current word and advance.
    ///
    /// When `expected` is given, the token must have that category.
    pub fn consume(&mut self, expected: Option<Category>) -> Result<String, GrammarError> {
        let position = self.cursor;
        let token = self
            .tokens
            .get(position)
            .ok_or(GrammarError::StreamExhausted { position })?;

        if let Some(expected) = expected {
            if token.category != expected {
                return Err(GrammarError::CategoryMismatch {
                    expected,
                    found: token.category,
                    word: token.word.clone(),
                    position,
                });
            }
        }

        self.cursor += 1;
        Ok(token.word.clone())
    }
}
