//! The fuzzy matcher agrees with the oracle.

use crate::oracles::{oracle_matches, title_strategy, word_strategy};
use fuzzdex::{classify, matches, MatchKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matcher_agrees_with_oracle(token in word_strategy(), key in title_strategy()) {
        prop_assert_eq!(matches(&token, &key), oracle_matches(&token, &key));
    }

    #[test]
    fn substring_always_matches(key in title_strategy(), start in 0usize..20, len in 1usize..6) {
        let chars: Vec<char> = key.chars().collect();
        let start = start.min(chars.len().saturating_sub(1));
        let end = (start + len).min(chars.len());
        let token: String = chars[start..end].iter().collect();
        prop_assume!(!token.trim().is_empty());
        prop_assert_eq!(classify(&token, &key), Some(MatchKind::Substring));
    }

    #[test]
    fn every_key_matches_its_own_letters_in_order(key in title_strategy(), stride in 1usize..4) {
        let token: String = key.chars().filter(|c| !c.is_whitespace()).step_by(stride).collect();
        prop_assert!(matches(&token, &key));
    }

    #[test]
    fn matching_ignores_case(token in word_strategy(), key in title_strategy()) {
        prop_assert_eq!(
            matches(&token.to_uppercase(), &key),
            matches(&token.to_lowercase(), &key.to_uppercase())
        );
    }
}

#[test]
fn subsequence_examples() {
    assert_eq!(classify("wrr", "Warrior"), Some(MatchKind::Subsequence));
    assert_eq!(classify("warr", "Warrior"), Some(MatchKind::Substring));
    assert_eq!(classify("rw", "Warrior"), None);
    assert!(!matches("", "Warrior"));
}
