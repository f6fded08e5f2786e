//! Word lists, one set per [`Category`].
//!
//! A lexicon is loaded once and only read afterwards. A word may be listed
//! under several categories; [`Lexicon::lookup`] resolves that by consulting
//! the sets in [`Category::PRECEDENCE`] order, never by set union.
//!
//! Lexicons can be built in code, taken from the built-in English data, or
//! read from JSON keyed by category tag:
//!
//! ```json
//! {
//!   "D": ["the", "a"],
//!   "N": ["cat", "dog"],
//!   "IV": ["ran"]
//! }
//! ```

mod english;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::category::Category;
use crate::error::LexiconError;

/// Nine word sets keyed by category. Entries are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    sets: BTreeMap<Category, BTreeSet<String>>,
}

impl Lexicon {
    /// An empty lexicon. Every word tags as [`Category::Unknown`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English word lists.
    pub fn english() -> Self {
        english::lexicon()
    }

    /// Add words to a category's set.
    ///
    /// Words are lowercased so that they can match tokenizer output.
    /// [`Category::Unknown`] is the fallback category and cannot hold words.
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if category.is_unknown() {
            return Err(LexiconError::CatchAll);
        }
        self.sets
            .entry(category)
            .or_default()
            .extend(words.into_iter().map(|word| word.as_ref().to_lowercase()));
        Ok(self)
    }

    /// Parse a lexicon from JSON keyed by category tag.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let entries: BTreeMap<Category, Vec<String>> = serde_json::from_str(json)?;
        entries
            .into_iter()
            .try_fold(Self::new(), |lexicon, (category, words)| {
                lexicon.with_words(category, words)
            })
    }

    /// Read a JSON lexicon from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Serialize the lexicon in the same JSON shape [`Lexicon::from_json`] reads.
    pub fn to_json(&self) -> Result<String, LexiconError> {
        Ok(serde_json::to_string_pretty(&self.sets)?)
    }

    /// Returns `true` if `word` is listed under `category`.
    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.sets
            .get(&category)
            .is_some_and(|set| set.contains(word))
    }

    /// The first category in precedence order whose set lists `word`.
    pub fn lookup(&self, word: &str) -> Option<Category> {
        Category::PRECEDENCE
            .into_iter()
            .find(|category| self.contains(*category, word))
    }

    /// Like [`Lexicon::lookup`], falling back to [`Category::Unknown`].
    pub fn categorize(&self, word: &str) -> Category {
        self.lookup(word).unwrap_or(Category::Unknown)
    }

    /// The words listed under `category`, in sorted order.
    pub fn words(&self, category: Category) -> impl Iterator<Item = &str> + '_ {
        self.sets
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Total number of entries across all sets.
    pub fn len(&self) -> usize {
        self.sets.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
