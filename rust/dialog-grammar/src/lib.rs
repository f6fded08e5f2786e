//! # dialog-grammar
//!
//! Part-of-speech tagging and constituency parsing for simple English
//! sentences.
//!
//! Text flows through three stages:
//!
//! ```text
//! text → tokenize → tag (Lexicon) → Parser::parse → Node
//! ```
//!
//! The tokenizer splits on whitespace, strips surrounding punctuation and
//! lowercases. The tagger assigns each word exactly one [`Category`] by
//! looking it up in the [`Lexicon`] in a fixed precedence order, falling back
//! to [`Category::Unknown`]. The parser is a recursive-descent engine over a
//! fixed phrase-structure grammar:
//!
//! ```text
//! S   = NP VP
//! NP  = D AJ+ N        → NP(D, AJP(AJ…, N))
//!     | D N
//!     | PN
//!     | PPN
//! VP  = SVP (C S)?     the conjunction clause is optional and recoverable
//! SVP = AV* IV AJ? AV*
//!     | AV* TV AV* (AJP | PP | NP?)? PP? AV*
//! PP  = P NP
//! AJP = NP             (AJ+ NP with greedy adjective phrases)
//! ```
//!
//! ## Example
//!
//! ```
//! use dialog_grammar::parse;
//!
//! let tree = parse("The cat ran.").unwrap();
//! assert_eq!(tree.compact(), "S(NP(D[the], N[cat]), VP(SVP(IV[ran])))");
//! ```
//!
//! The indented rendering is the tree's [`Display`](std::fmt::Display) form:
//!
//! ```text
//! [S
//!     [NP
//!         [D the]
//!         [N cat]
//!     ]
//!     [VP
//!         [SVP
//!             [IV ran]
//!         ]
//!     ]
//! ]
//! ```

pub mod category;
pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod options;
pub mod parser;
pub mod stream;
pub mod tagger;
pub mod tokenizer;
pub mod tree;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub use category::Category;
pub use error::{Expected, GrammarError, LexiconError};
pub use grammar::{Grammar, Parse, parse};
pub use lexicon::Lexicon;
pub use options::{AdjectivePhrase, DEFAULT_MAX_DEPTH, ParserOptions, TrailingTokens};
pub use parser::Parser;
pub use stream::TokenStream;
pub use tagger::{Token, tag};
pub use tokenizer::tokenize;
pub use tree::{Node, Phrase};
