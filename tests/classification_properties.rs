//! Property tests for the classifier invariants.

use proptest::prelude::*;
use tally::engine::classifier::{classify_tokens, is_alphabet, is_number};

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]",
        "-?[0-9]{1,6}(\\.[0-9]{1,3})?",
        "[a-zA-Z]{2,6}",
        "[$#@!%&* ]{1,3}",
        "[+-]?[0-9]\\.?[0-9]*[eE][+-]?[0-9]{1,3}",
        prop::sample::select(vec!["inf", "NaN", " 1", "1 "]).prop_map(String::from),
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn numbers_and_alphabets_partition_input(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let result = classify_tokens(&tokens);

        prop_assert_eq!(
            result.numbers.len() + result.alphabets.len() + result.dropped,
            tokens.len()
        );
        for number in &result.numbers {
            prop_assert!(!result.alphabets.contains(number));
            prop_assert!(is_number(number));
        }
        for alphabet in &result.alphabets {
            prop_assert!(is_alphabet(alphabet));
        }
    }

    #[test]
    fn outputs_preserve_input_order(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let result = classify_tokens(&tokens);
        let numbers: Vec<&String> = tokens.iter().filter(|t| is_number(t)).collect();
        let alphabets: Vec<&String> = tokens.iter().filter(|t| is_alphabet(t)).collect();
        prop_assert_eq!(result.numbers.iter().collect::<Vec<_>>(), numbers);
        prop_assert_eq!(result.alphabets.iter().collect::<Vec<_>>(), alphabets);
    }

    #[test]
    fn highest_alphabet_dominates(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let result = classify_tokens(&tokens);

        prop_assert_eq!(result.highest_alphabet.is_empty(), result.alphabets.is_empty());
        prop_assert!(result.highest_alphabet.len() <= 1);

        if let Some(highest) = result.highest_alphabet.first() {
            let highest = highest.to_ascii_lowercase();
            for alphabet in &result.alphabets {
                prop_assert!(highest >= alphabet.to_ascii_lowercase());
            }
            // Leftmost of the tied maxima
            let first = result
                .alphabets
                .iter()
                .find(|a| a.to_ascii_lowercase() == highest)
                .unwrap();
            prop_assert_eq!(first, &result.highest_alphabet[0]);
        }
    }

    #[test]
    fn classification_is_idempotent(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        prop_assert_eq!(classify_tokens(&tokens), classify_tokens(&tokens));
    }

    #[test]
    fn exponent_numbers_are_numbers_only_when_finite(token in "[+-]?[0-9]\\.?[0-9]*[eE][+-]?[0-9]{1,3}") {
        let finite = token.parse::<f64>().map(f64::is_finite).unwrap_or(false);
        prop_assert_eq!(is_number(&token), finite);
        prop_assert!(!is_alphabet(&token));
    }

    #[test]
    fn padded_and_non_finite_tokens_are_dropped(token in prop::sample::select(vec!["inf", "NaN", " 1", "1 "])) {
        let result = classify_tokens(&[token]);
        prop_assert!(result.numbers.is_empty());
        prop_assert_eq!(result.dropped, 1);
    }
}
