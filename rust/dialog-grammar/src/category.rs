//! Part-of-speech categories.
//!
//! Every tagged word carries exactly one [`Category`]. The short tags (`D`,
//! `TV`, `PPN`, ...) are what appear in rendered trees, JSON output and
//! lexicon files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A coarse part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// `the`, `a`, `my`, ...
    #[serde(rename = "D")]
    Determiner,
    /// `on`, `of`, `with`, ...
    #[serde(rename = "P")]
    Preposition,
    /// `and`, `but`, `because`, ...
    #[serde(rename = "C")]
    Conjunction,
    /// `i`, `she`, `them`, ...
    #[serde(rename = "PN")]
    Pronoun,
    /// A verb that can take a complement.
    #[serde(rename = "TV")]
    TransitiveVerb,
    /// A verb that takes no complement.
    #[serde(rename = "IV")]
    IntransitiveVerb,
    /// `quickly`, `not`, `here`, ...
    #[serde(rename = "AV")]
    Adverb,
    /// `big`, `old`, `smart`, ...
    #[serde(rename = "AJ")]
    Adjective,
    /// `cat`, `teacher`, `world`, ...
    #[serde(rename = "N")]
    Noun,
    /// Any word found in no lexicon set. Treated as a proper noun.
    #[serde(rename = "PPN")]
    Unknown,
}

impl Category {
    /// The order in which lexicon sets are consulted when tagging.
    ///
    /// The first set containing a word decides its category, so a word
    /// listed as both a transitive and an intransitive verb is always a
    /// [`Category::TransitiveVerb`]. [`Category::Unknown`] is absent: it is
    /// the fallback, not a set.
    pub const PRECEDENCE: [Category; 9] = [
        Category::Determiner,
        Category::Preposition,
        Category::Conjunction,
        Category::Pronoun,
        Category::TransitiveVerb,
        Category::IntransitiveVerb,
        Category::Adverb,
        Category::Adjective,
        Category::Noun,
    ];

    /// The short tag used in trees and lexicon files.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Determiner => "D",
            Self::Preposition => "P",
            Self::Conjunction => "C",
            Self::Pronoun => "PN",
            Self::TransitiveVerb => "TV",
            Self::IntransitiveVerb => "IV",
            Self::Adverb => "AV",
            Self::Adjective => "AJ",
            Self::Noun => "N",
            Self::Unknown => "PPN",
        }
    }

    /// Returns `true` for [`Category::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error returned when parsing a tag that names no category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category tag '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Category {
    type Err = UnknownTag;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "D" => Ok(Self::Determiner),
            "P" => Ok(Self::Preposition),
            "C" => Ok(Self::Conjunction),
            "PN" => Ok(Self::Pronoun),
            "TV" => Ok(Self::TransitiveVerb),
            "IV" => Ok(Self::IntransitiveVerb),
            "AV" => Ok(Self::Adverb),
            "AJ" => Ok(Self::Adjective),
            "N" => Ok(Self::Noun),
            "PPN" => Ok(Self::Unknown),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_roundtrip_through_from_str() {
        for category in Category::PRECEDENCE.iter().chain([&Category::Unknown]) {
            assert_eq!(category.tag().parse::<Category>(), Ok(*category));
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert_eq!("X".parse::<Category>(), Err(UnknownTag("X".into())));
    }

    #[test]
    fn test_precedence_puts_transitive_before_intransitive() {
        let position = |c: Category| Category::PRECEDENCE.iter().position(|p| *p == c);
        assert!(position(Category::TransitiveVerb) < position(Category::IntransitiveVerb));
        assert_eq!(position(Category::Unknown), None);
    }

    #[test]
    fn test_serde_uses_short_tags() {
        let json = serde_json::to_string(&Category::TransitiveVerb).unwrap();
        assert_eq!(json, "\"TV\"");
        let category: Category = serde_json::from_str("\"PPN\"").unwrap();
        assert_eq!(category, Category::Unknown);
    }
}
