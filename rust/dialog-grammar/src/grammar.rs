//! The text → tree pipeline.

use std::sync::LazyLock;

use crate::error::GrammarError;
use crate::lexicon::Lexicon;
use crate::options::ParserOptions;
use crate::parser::Parser;
use crate::tagger::{Token, tag};
use crate::tokenizer::tokenize;
use crate::tree::Node;

static ENGLISH: LazyLock<Grammar> = LazyLock::new(Grammar::english);

/// A lexicon and parser options, ready to parse any number of sentences.
///
/// A `Grammar` is never modified by parsing; every call to
/// [`Grammar::parse`] builds its own token stream.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    lexicon: Lexicon,
    options: ParserOptions,
}

/// A successful parse: the tagged tokens and the tree built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub tokens: Vec<Token>,
    pub tree: Node,
}

impl Grammar {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            options: ParserOptions::default(),
        }
    }

    /// A grammar over the built-in English lexicon.
    pub fn english() -> Self {
        Self::new(Lexicon::english())
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Tokenize and tag `text`.
    pub fn tag(&self, text: &str) -> Vec<Token> {
        tag(tokenize(text), &self.lexicon)
    }

    /// Tokenize, tag and parse `text` as one sentence.
    pub fn parse(&self, text: &str) -> Result<Parse, GrammarError> {
        let tokens = self.tag(text);
        tracing::debug!(
            tokens = %tokens.iter().map(Token::to_string).collect::<Vec<_>>().join(" "),
            "parsing"
        );
        let tree = Parser::with_options(tokens.clone(), self.options).parse()?;
        Ok(Parse { tokens, tree })
    }
}

/// Parse a sentence with the built-in English lexicon and default options.
///
/// # Example
///
/// ```
/// use dialog_grammar::parse;
///
/// let tree = parse("I ran and he jumped.").unwrap();
/// assert_eq!(tree.words(), vec!["i", "ran", "and", "he", "jumped"]);
/// ```
pub fn parse(text: &str) -> Result<Node, GrammarError> {
    ENGLISH.parse(text).map(|parse| parse.tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use testresult::TestResult;

    #[test]
    fn test_parse_returns_tokens_and_tree() -> TestResult {
        let parse = Grammar::english().parse("The cat ran.")?;
        assert_eq!(
            parse.tokens,
            vec![
                Token::new("the", Category::Determiner),
                Token::new("cat", Category::Noun),
                Token::new("ran", Category::IntransitiveVerb),
            ]
        );
        assert_eq!(parse.tree.words(), vec!["the", "cat", "ran"]);
        Ok(())
    }

    #[test]
    fn test_custom_lexicon() -> TestResult {
        let lexicon = Lexicon::new()
            .with_words(Category::Determiner, ["le"])?
            .with_words(Category::Noun, ["chat"])?
            .with_words(Category::IntransitiveVerb, ["dort"])?;
        let tree = Grammar::new(lexicon).parse("Le chat dort.")?.tree;
        assert_eq!(tree.compact(), "S(NP(D[le], N[chat]), VP(SVP(IV[dort])))");
        Ok(())
    }

    #[test]
    fn test_options_are_applied() {
        let grammar = Grammar::english().with_options(ParserOptions::new().reject_trailing_tokens());
        assert!(matches!(
            grammar.parse("the cat ran the dog"),
            Err(GrammarError::TrailingTokens { position: 3, remaining: 2 })
        ));
    }

    #[test]
    fn test_grammar_is_reusable() -> TestResult {
        let grammar = Grammar::english();
        let first = grammar.parse("the cat ran")?;
        let second = grammar.parse("the cat ran")?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_empty_lexicon_tags_everything_unknown() {
        let grammar = Grammar::new(Lexicon::new());
        let tokens = grammar.tag("Alice, Bob!");
        assert!(tokens.iter().all(|token| token.category.is_unknown()));
        assert!(matches!(
            grammar.parse("alice bob"),
            Err(GrammarError::GrammarViolation { .. })
        ));
    }
}
