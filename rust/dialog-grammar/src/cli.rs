use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::LexiconError;
use crate::grammar::{Grammar, Parse};
use crate::lexicon::Lexicon;
use crate::options::{DEFAULT_MAX_DEPTH, ParserOptions};
use crate::tagger::Token;

/// Output format for parse trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented bracket tree.
    #[default]
    Tree,
    /// One line per sentence.
    Compact,
    /// JSON object per sentence.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "grammar")]
#[command(bin_name = "grammar")]
#[command(about = "Tag and parse simple English sentences", long_about = None)]
pub struct GrammarCli {
    /// Sentences to parse. Reads one sentence per line from stdin when omitted.
    pub sentences: Vec<String>,

    /// JSON lexicon to use instead of the built-in English word lists.
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// How to print each parsed sentence.
    #[arg(short, long, value_enum, default_value_t = Format::Tree)]
    pub format: Format,

    /// Print the tagged tokens before each tree.
    #[arg(short, long)]
    pub tokens: bool,

    /// Fail when words are left over after the sentence.
    #[arg(long)]
    pub strict: bool,

    /// Collect adjectives at the start of a verb's adjective phrase complement.
    #[arg(long)]
    pub greedy_adjectives: bool,

    /// Deepest nesting of sentences joined by conjunctions.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl GrammarCli {
    pub fn options(&self) -> ParserOptions {
        let mut options = ParserOptions::new().with_max_depth(self.max_depth);
        if self.strict {
            options = options.reject_trailing_tokens();
        }
        if self.greedy_adjectives {
            options = options.greedy_adjective_phrase();
        }
        options
    }

    pub fn grammar(&self) -> Result<Grammar, LexiconError> {
        let lexicon = match &self.lexicon {
            Some(path) => Lexicon::from_path(path)?,
            None => Lexicon::english(),
        };
        Ok(Grammar::new(lexicon).with_options(self.options()))
    }

    /// Render one successful parse in the selected format.
    pub fn render(&self, parse: &Parse) -> Result<String, serde_json::Error> {
        let tokens = parse
            .tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        match self.format {
            Format::Json => {
                let mut value = serde_json::json!({ "tree": parse.tree });
                if self.tokens {
                    value["tokens"] = serde_json::to_value(&parse.tokens)?;
                }
                serde_json::to_string(&value)
            }
            Format::Tree if self.tokens => Ok(format!("{tokens}\n{}", parse.tree)),
            Format::Tree => Ok(parse.tree.to_string()),
            Format::Compact if self.tokens => Ok(format!("{tokens}\n{}", parse.tree.compact())),
            Format::Compact => Ok(parse.tree.compact()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    fn cli(args: &[&str]) -> GrammarCli {
        GrammarCli::parse_from(std::iter::once("grammar").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_map_to_options() {
        assert_eq!(cli(&[]).options(), ParserOptions::default());
        assert_eq!(
            cli(&["--strict", "--greedy-adjectives"]).options(),
            ParserOptions::new()
                .reject_trailing_tokens()
                .greedy_adjective_phrase()
        );
    }

    #[test]
    fn test_grammar_carries_the_options() -> TestResult {
        let grammar = cli(&["--strict", "--max-depth", "8"]).grammar()?;
        assert_eq!(
            grammar.options(),
            ParserOptions::new().reject_trailing_tokens().with_max_depth(8)
        );
        Ok(())
    }

    #[test]
    fn test_sentences_are_positional() {
        let cli = cli(&["-f", "compact", "the cat ran", "he jumped"]);
        assert_eq!(cli.sentences, vec!["the cat ran", "he jumped"]);
        assert_eq!(cli.format, Format::Compact);
    }

    #[test]
    fn test_render_compact_with_tokens() -> TestResult {
        let cli = cli(&["-f", "compact", "-t"]);
        let parse = cli.grammar()?.parse("The cat ran.")?;
        assert_eq!(
            cli.render(&parse)?,
            "the/D cat/N ran/IV\nS(NP(D[the], N[cat]), VP(SVP(IV[ran])))"
        );
        Ok(())
    }

    #[test]
    fn test_render_json() -> TestResult {
        let cli = cli(&["--format", "json"]);
        let parse = cli.grammar()?.parse("Bob ran")?;
        let value: serde_json::Value = serde_json::from_str(&cli.render(&parse)?)?;
        assert_eq!(value["tree"]["phrase"], "S");
        assert_eq!(value["tree"]["children"][0]["children"][0]["category"], "PPN");
        assert!(value.get("tokens").is_none());
        Ok(())
    }

    #[test]
    fn test_missing_lexicon_file() {
        let cli = cli(&["--lexicon", "/nonexistent/lexicon.json"]);
        assert!(matches!(cli.grammar(), Err(LexiconError::Io { .. })));
    }
}
