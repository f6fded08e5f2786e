//! Property tests for the tokenizer and tagger.
mod properties {
    use dialog_grammar::tokenizer::{PUNCTUATION, is_punctuation};
    use dialog_grammar::{Category, Grammar, Lexicon, tag, tokenize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokenizing_normalized_text_is_idempotent(text in "[a-z]{1,10}( [a-z]{1,10}){0,8}") {
            let words = tokenize(&text);
            prop_assert_eq!(tokenize(&words.join(" ")), words);
        }

        #[test]
        fn tokenizer_output_is_a_fixed_point(text in "[A-Za-z.,!?\"' ]{0,60}") {
            let words: Vec<String> = tokenize(&text)
                .into_iter()
                .filter(|word| !word.is_empty())
                .collect();
            prop_assert_eq!(tokenize(&words.join(" ")), words);
        }

        #[test]
        fn tokenizer_keeps_one_word_per_piece(text in "\\PC{0,60}") {
            prop_assert_eq!(tokenize(&text).len(), text.split_whitespace().count());
        }

        #[test]
        fn words_never_start_or_end_with_punctuation(text in "\\PC{0,60}") {
            for word in tokenize(&text) {
                prop_assert!(!word.starts_with(is_punctuation));
                prop_assert!(!word.ends_with(is_punctuation));
            }
        }

        #[test]
        fn tagging_drops_only_punctuation(text in "[a-z.,!?;' ]{0,60}") {
            let words = tokenize(&text);
            let tokens = tag(&words, &Lexicon::english());
            let kept: Vec<&str> = words
                .iter()
                .map(String::as_str)
                .filter(|word| !word.chars().all(|c| PUNCTUATION.contains(c)))
                .collect();
            prop_assert_eq!(
                tokens.iter().map(|token| token.word.as_str()).collect::<Vec<_>>(),
                kept
            );
        }

        #[test]
        fn unlisted_words_are_unknown(word in "[a-z]{12,16}") {
            let lexicon = Lexicon::english();
            prop_assume!(lexicon.lookup(&word).is_none());
            let tokens = tag([word.as_str()], &lexicon);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].category, Category::Unknown);
        }

        #[test]
        fn unknown_subjects_parse(name in "[a-z]{12,16}") {
            let grammar = Grammar::english();
            prop_assume!(grammar.lexicon().lookup(&name).is_none());
            let tree = grammar.parse(&format!("{name} ran")).map(|parse| parse.tree.compact());
            prop_assert_eq!(tree, Ok(format!("S(NP(PPN[{name}]), VP(SVP(IV[ran])))")));
        }
    }
}
