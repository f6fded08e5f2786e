//! Built-in English word lists.

use std::collections::{BTreeMap, BTreeSet};

use super::Lexicon;
use crate::category::Category;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "its", "our",
    "their", "any",
];

const PREPOSITIONS: &[&str] = &[
    "on", "at", "by", "between", "in", "of", "to", "for", "with", "from", "up",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "so", "yet", "after", "if", "when", "because", "that", "while",
    "although",
];

const PRONOUNS: &[&str] = &[
    "I", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours",
    "his", "hers", "its",
];

const TRANSITIVE_VERBS: &[&str] = &[
    "be", "is", "was", "fail", "failed", "seems", "have", "had", "has", "do", "say", "make",
    "made", "go", "went", "take", "get", "got", "come", "came", "see", "saw", "know", "knew",
    "look", "looked", "want", "wanted", "give", "gave", "use", "used", "find", "found", "tell",
    "told", "ask", "asked", "work", "worked", "seem", "seemed", "feel", "felt", "try", "tried",
    "studied", "leave", "left", "call", "called", "mean", "meant", "think", "thought",
];

const INTRANSITIVE_VERBS: &[&str] = &[
    "be", "is", "was", "have", "had", "has", "do", "did", "say", "said", "go", "went", "get",
    "got", "make", "made", "know", "knew", "think", "thought", "see", "saw", "come", "came",
    "want", "wanted", "look", "looked", "use", "used", "find", "found", "give", "gave", "tell",
    "told", "work", "worked", "call", "called", "try", "tried", "feel", "felt", "become",
    "became", "leave", "left", "put", "mean", "meant", "ran", "run", "runs", "jumped", "jump",
    "jumps", "slept", "sleeps", "walked", "walks", "laughed", "smiled", "arrived", "fell",
    "swam", "cried",
];

const ADVERBS: &[&str] = &[
    "hard", "quickly", "faster", "fast", "slowly", "well", "poorly", "yesterday", "back",
    "tomorrow", "not", "so", "then", "more", "now", "out", "also", "up", "just", "very", "how",
    "when", "there", "only", "even", "down", "where", "here", "together", "solo", "alone",
];

const ADJECTIVES: &[&str] = &[
    "independent", "big", "young", "small", "great", "smart", "dumb", "two", "scary", "cute",
    "other", "new", "good", "high", "old", "American", "large", "national", "different",
    "black", "long", "little", "important", "political", "bad", "white", "real", "best",
    "right", "social", "only", "tall", "short", "skinny", "fat", "blonde",
];

const NOUNS: &[&str] = &[
    "boy", "competitor", "boys", "mom", "moms", "teacher", "teachers", "cat", "cats", "dog",
    "dogs", "tree", "trees", "car", "cars", "time", "year", "years", "people", "person", "way",
    "day", "days", "man", "woman", "men", "women", "thing", "life", "child", "children",
    "world", "school", "state", "family", "student", "students", "group", "country",
    "problem", "hand", "part", "place", "case", "week", "company", "system", "store", "house",
    "park", "ball", "book", "bird", "birds",
];

pub(super) fn lexicon() -> Lexicon {
    let sets: BTreeMap<Category, BTreeSet<String>> = [
        (Category::Determiner, DETERMINERS),
        (Category::Preposition, PREPOSITIONS),
        (Category::Conjunction, CONJUNCTIONS),
        (Category::Pronoun, PRONOUNS),
        (Category::TransitiveVerb, TRANSITIVE_VERBS),
        (Category::IntransitiveVerb, INTRANSITIVE_VERBS),
        (Category::Adverb, ADVERBS),
        (Category::Adjective, ADJECTIVES),
        (Category::Noun, NOUNS),
    ]
    .into_iter()
    .map(|(category, words)| {
        (
            category,
            words.iter().map(|word| word.to_lowercase()).collect(),
        )
    })
    .collect();

    Lexicon { sets }
}
