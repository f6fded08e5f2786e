//! Recursive-descent parser over a tagged token stream.
//!
//! ```text
//! S   = NP VP
//! NP  = D AJ+ N         → NP(D, AJP(AJ…, N))
//!     | D N             → NP(D, N)
//!     | PN | PPN
//! VP  = SVP (C S)?
//! SVP = AV* IV AJ? AV*
//!     | AV* TV AV* complement? PP? AV*
//! complement = AJP | PP | NP
//! PP  = P NP
//! AJP = AJ* NP          (no adjectives unless greedy)
//! ```
//!
//! Branches are chosen by looking at the category of the current token. Once
//! a branch is chosen its failures are fatal, with three exceptions where a
//! constituent is optional:
//!
//! - the `C S` clause of a VP,
//! - the NP complement of a transitive verb,
//! - the trailing PP of a transitive verb.
//!
//! At those sites the parser saves the cursor, tries the rule, and on failure
//! restores the cursor and carries on without the constituent. No other site
//! recovers from errors.
//!
//! Sentences nest through conjunction clauses. Entering a sentence deeper
//! than [`ParserOptions::max_depth`] fails with [`GrammarError::TooDeep`],
//! which the enclosing clause site recovers from like any other failure.

use crate::category::Category;
use crate::error::{Expected, GrammarError};
use crate::options::{AdjectivePhrase, ParserOptions, TrailingTokens};
use crate::stream::TokenStream;
use crate::tagger::Token;
use crate::tree::{Node, Phrase};

/// A single-use parse context over one sentence's tokens.
pub struct Parser {
    stream: TokenStream,
    options: ParserOptions,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: ParserOptions) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            options,
            depth: 0,
        }
    }

    /// Parse the tokens as one sentence.
    ///
    /// Consumes the parser; the token stream cannot be parsed twice.
    pub fn parse(mut self) -> Result<Node, GrammarError> {
        let tree = self.parse_sentence()?;

        if !self.stream.is_exhausted() {
            let position = self.stream.position();
            let remaining = self.stream.remaining().len();
            match self.options.trailing {
                TrailingTokens::Ignore => {
                    tracing::debug!(position, remaining, "ignoring trailing tokens");
                }
                TrailingTokens::Reject => {
                    return Err(GrammarError::TrailingTokens {
                        position,
                        remaining,
                    });
                }
            }
        }

        Ok(tree)
    }

    /// Run an optional rule, restoring the cursor if it fails.
    fn attempt<T>(
        &mut self,
        constituent: &'static str,
        rule: impl FnOnce(&mut Self) -> Result<T, GrammarError>,
    ) -> Option<T> {
        let saved = self.stream.position();
        match rule(self) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::debug!(constituent, %error, restored = saved, "optional constituent omitted");
                self.stream.restore(saved);
                None
            }
        }
    }

    fn violation(&self, expected: Expected) -> GrammarError {
        GrammarError::GrammarViolation {
            expected,
            position: self.stream.position(),
        }
    }

    fn leaf(&mut self, category: Category) -> Result<Node, GrammarError> {
        let word = self.stream.consume(Some(category))?;
        Ok(Node::leaf(category, word))
    }

    /// Consume leaves of `category` while the next token has it.
    fn leaves_while(&mut self, category: Category) -> Result<Vec<Node>, GrammarError> {
        let mut leaves = Vec::new();
        while self.stream.next_is(category) {
            leaves.push(self.leaf(category)?);
        }
        Ok(leaves)
    }

    // --- Sentence ---

    fn parse_sentence(&mut self) -> Result<Node, GrammarError> {
        if self.depth >= self.options.max_depth {
            return Err(GrammarError::TooDeep {
                limit: self.options.max_depth,
                position: self.stream.position(),
            });
        }

        self.depth += 1;
        let sentence = self.parse_clauses();
        self.depth -= 1;
        sentence
    }

    fn parse_clauses(&mut self) -> Result<Node, GrammarError> {
        tracing::trace!(position = self.stream.position(), depth = self.depth, "S");
        let noun_phrase = self.parse_noun_phrase()?;
        let verb_phrase = self.parse_verb_phrase()?;
        Ok(Node::phrase(Phrase::Sentence, vec![noun_phrase, verb_phrase]))
    }

    // --- Noun phrase ---

    fn parse_noun_phrase(&mut self) -> Result<Node, GrammarError> {
        tracing::trace!(position = self.stream.position(), "NP");

        if self.stream.matches(Category::Determiner)? {
            let determiner = self.leaf(Category::Determiner)?;

            if self.stream.matches(Category::Adjective)? {
                let mut modified = Vec::new();
                // Runs off the end of input with StreamExhausted, like `matches`.
                while self.stream.matches(Category::Adjective)? {
                    modified.push(self.leaf(Category::Adjective)?);
                }
                modified.push(self.leaf(Category::Noun)?);
                return Ok(Node::phrase(
                    Phrase::NounPhrase,
                    vec![determiner, Node::phrase(Phrase::AdjectivePhrase, modified)],
                ));
            }

            let noun = self.leaf(Category::Noun)?;
            Ok(Node::phrase(Phrase::NounPhrase, vec![determiner, noun]))
        } else if self.stream.matches(Category::Pronoun)? {
            let pronoun = self.leaf(Category::Pronoun)?;
            Ok(Node::phrase(Phrase::NounPhrase, vec![pronoun]))
        } else if self.stream.matches(Category::Unknown)? {
            let name = self.leaf(Category::Unknown)?;
            Ok(Node::phrase(Phrase::NounPhrase, vec![name]))
        } else {
            Err(self.violation(Expected::NounPhrase))
        }
    }

    // --- Verb phrase ---

    fn parse_verb_phrase(&mut self) -> Result<Node, GrammarError> {
        tracing::trace!(position = self.stream.position(), "VP");
        let simple = self.parse_simple_verb_phrase()?;

        let clause = if self.stream.next_is(Category::Conjunction) {
            self.attempt("conjunction clause", |parser| {
                let conjunction = parser.leaf(Category::Conjunction)?;
                let sentence = parser.parse_sentence()?;
                Ok((conjunction, sentence))
            })
        } else {
            None
        };

        let children = match clause {
            Some((conjunction, sentence)) => vec![simple, conjunction, sentence],
            None => vec![simple],
        };
        Ok(Node::phrase(Phrase::VerbPhrase, children))
    }

    fn parse_simple_verb_phrase(&mut self) -> Result<Node, GrammarError> {
        tracing::trace!(position = self.stream.position(), "SVP");

        let mut children = Vec::new();
        while self.stream.matches(Category::Adverb)? {
            children.push(self.leaf(Category::Adverb)?);
        }

        if self.stream.matches(Category::IntransitiveVerb)? {
            children.push(self.leaf(Category::IntransitiveVerb)?);
            if self.stream.next_is(Category::Adjective) {
                children.push(self.leaf(Category::Adjective)?);
            }
            children.extend(self.leaves_while(Category::Adverb)?);
        } else if self.stream.matches(Category::TransitiveVerb)? {
            children.push(self.leaf(Category::TransitiveVerb)?);
            children.extend(self.leaves_while(Category::Adverb)?);

            if let Some(complement) = self.parse_complement()? {
                children.push(complement);
            }

            let trailing = if self.stream.next_is(Category::Preposition) {
                self.attempt("trailing PP", Self::parse_prepositional_phrase)
                    .flatten()
            } else {
                None
            };

            children.extend(self.leaves_while(Category::Adverb)?);
            children.extend(trailing);
        } else {
            return Err(self.violation(Expected::Verb));
        }

        Ok(Node::phrase(Phrase::SimpleVerbPhrase, children))
    }

    /// The single complement of a transitive verb: AJP, PP or NP, in that
    /// order. AJP and PP are mandatory once their first token is seen; the
    /// NP is omitted if it does not parse.
    fn parse_complement(&mut self) -> Result<Option<Node>, GrammarError> {
        if self.stream.is_exhausted() {
            return Ok(None);
        }

        if self.stream.next_is(Category::Adjective) {
            self.parse_adjective_phrase().map(Some)
        } else if self.stream.next_is(Category::Preposition) {
            self.parse_prepositional_phrase()
        } else {
            Ok(self.attempt("NP complement", Self::parse_noun_phrase))
        }
    }

    // --- Prepositional and adjective phrases ---

    /// `P NP`, or `None` when the current token is not a preposition.
    fn parse_prepositional_phrase(&mut self) -> Result<Option<Node>, GrammarError> {
        tracing::trace!(position = self.stream.position(), "PP");

        if !self.stream.matches(Category::Preposition)? {
            return Ok(None);
        }

        let preposition = self.leaf(Category::Preposition)?;
        let object = self.required_noun_phrase()?;
        Ok(Some(Node::phrase(
            Phrase::PrepositionalPhrase,
            vec![preposition, object],
        )))
    }

    fn parse_adjective_phrase(&mut self) -> Result<Node, GrammarError> {
        tracing::trace!(position = self.stream.position(), "AJP");

        let mut children = match self.options.adjective_phrase {
            AdjectivePhrase::Literal => Vec::new(),
            AdjectivePhrase::Greedy => self.leaves_while(Category::Adjective)?,
        };
        children.push(self.required_noun_phrase()?);
        Ok(Node::phrase(Phrase::AdjectivePhrase, children))
    }

    /// An NP whose absence is reported as `NP expected` regardless of how
    /// the attempt failed.
    fn required_noun_phrase(&mut self) -> Result<Node, GrammarError> {
        let position = self.stream.position();
        self.parse_noun_phrase().map_err(|error| {
            tracing::trace!(%error, "NP required");
            GrammarError::GrammarViolation {
                expected: Expected::NounPhrase,
                position,
            }
        })
    }
}
