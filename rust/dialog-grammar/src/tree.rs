//! Constituency trees.
//!
//! A tree is made of two kinds of node: a [`Node::Leaf`] holding one word and
//! its category, and a [`Node::Phrase`] holding an ordered list of children
//! under a [`Phrase`] label. Nodes are built bottom-up by the parser and never
//! change afterwards.
//!
//! Rendering a tree to text and re-parsing that text does not give the tree
//! back: the renderings carry category tags rather than the sentence's
//! original casing and punctuation, and the tags themselves would be
//! tokenized and tagged as ordinary words.

use std::fmt;

use serde::Serialize;

use crate::category::Category;

/// The label of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phrase {
    #[serde(rename = "S")]
    Sentence,
    #[serde(rename = "NP")]
    NounPhrase,
    #[serde(rename = "VP")]
    VerbPhrase,
    #[serde(rename = "SVP")]
    SimpleVerbPhrase,
    #[serde(rename = "PP")]
    PrepositionalPhrase,
    #[serde(rename = "AJP")]
    AdjectivePhrase,
}

impl Phrase {
    pub fn label(&self) -> &'static str {
        match self {
            Phrase::Sentence => "S",
            Phrase::NounPhrase => "NP",
            Phrase::VerbPhrase => "VP",
            Phrase::SimpleVerbPhrase => "SVP",
            Phrase::PrepositionalPhrase => "PP",
            Phrase::AdjectivePhrase => "AJP",
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A node of a parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A single word under its category.
    Leaf { category: Category, word: String },
    /// A phrase with its constituents in sentence order.
    Phrase { phrase: Phrase, children: Vec<Node> },
}

/// Indentation added per tree level by the indented rendering.
const INDENT: &str = "    ";

impl Node {
    pub fn leaf(category: Category, word: impl Into<String>) -> Self {
        Node::Leaf {
            category,
            word: word.into(),
        }
    }

    pub fn phrase(phrase: Phrase, children: Vec<Node>) -> Self {
        Node::Phrase { phrase, children }
    }

    /// The category tag of a leaf or the label of a phrase.
    pub fn label(&self) -> &'static str {
        match self {
            Node::Leaf { category, .. } => category.tag(),
            Node::Phrase { phrase, .. } => phrase.label(),
        }
    }

    /// The children of a phrase. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Phrase { children, .. } => children,
        }
    }

    /// The word of a leaf.
    pub fn word(&self) -> Option<&str> {
        match self {
            Node::Leaf { word, .. } => Some(word),
            Node::Phrase { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Returns `true` if this node is a phrase labelled `phrase`.
    pub fn is(&self, phrase: Phrase) -> bool {
        matches!(self, Node::Phrase { phrase: p, .. } if *p == phrase)
    }

    /// The words under this node, left to right.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        self.collect_words(&mut words);
        words
    }

    fn collect_words<'a>(&'a self, words: &mut Vec<&'a str>) {
        match self {
            Node::Leaf { word, .. } => words.push(word),
            Node::Phrase { children, .. } => {
                for child in children {
                    child.collect_words(words);
                }
            }
        }
    }

    /// Number of levels from this node down to its deepest leaf, counting
    /// both ends.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Single-line rendering, e.g. `S(NP(D[the], N[cat]), VP(SVP(IV[ran])))`.
    pub fn compact(&self) -> String {
        let mut out = String::new();
        self.write_compact(&mut out);
        out
    }

    fn write_compact(&self, out: &mut String) {
        match self {
            Node::Leaf { category, word } => {
                out.push_str(category.tag());
                out.push('[');
                out.push_str(word);
                out.push(']');
            }
            Node::Phrase { phrase, children } => {
                out.push_str(phrase.label());
                out.push('(');
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    child.write_compact(out);
                }
                out.push(')');
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = INDENT.repeat(level);
        match self {
            Node::Leaf { category, word } if word.is_empty() => write!(f, "{indent}[{category}]"),
            Node::Leaf { category, word } => write!(f, "{indent}[{category} {word}]"),
            Node::Phrase { phrase, children } if children.is_empty() => {
                write!(f, "{indent}[{phrase}]")
            }
            Node::Phrase { phrase, children } => {
                writeln!(f, "{indent}[{phrase}")?;
                for child in children {
                    child.write_indented(f, level + 1)?;
                    writeln!(f)?;
                }
                write!(f, "{indent}]")
            }
        }
    }
}

/// The indented rendering.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
