//! Parser configuration.

/// What to do with tokens left over after a complete sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingTokens {
    /// Return the sentence and leave the rest unparsed.
    #[default]
    Ignore,
    /// Fail with [`crate::GrammarError::TrailingTokens`].
    Reject,
}

/// How an adjective phrase complement of a transitive verb is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjectivePhrase {
    /// The adjective accumulation of the reference grammar never runs, so the
    /// phrase holds only a noun phrase, which must start at the adjective
    /// itself. In practice `TV AJ ...` fails with `NP expected`.
    #[default]
    Literal,
    /// Collect every adjective ahead, then the noun phrase.
    Greedy,
}

/// Default limit on nested sentences, counting the outermost one.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a [`crate::Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub trailing: TrailingTokens,
    pub adjective_phrase: AdjectivePhrase,
    /// How many sentences may nest through conjunction clauses. A clause
    /// that would go deeper is left out of its verb phrase.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            trailing: TrailingTokens::default(),
            adjective_phrase: AdjectivePhrase::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_trailing_tokens(mut self) -> Self {
        self.trailing = TrailingTokens::Reject;
        self
    }

    pub fn greedy_adjective_phrase(mut self) -> Self {
        self.adjective_phrase = AdjectivePhrase::Greedy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
