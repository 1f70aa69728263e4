//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that the optimized code is
//! checked against.

use fuzzdex::{ResultType, SearchResult};
use proptest::prelude::*;

/// Does `needle` occur in `haystack` as an in-order subsequence of chars?
///
/// Tries every starting point recursively. Exponential in the worst case, so
/// only feed it short strings.
pub fn oracle_subsequence(needle: &[char], haystack: &[char]) -> bool {
    match needle.split_first() {
        None => true,
        Some((first, rest)) => haystack
            .iter()
            .enumerate()
            .any(|(i, c)| c == first && oracle_subsequence(rest, &haystack[i + 1..])),
    }
}

/// Naive matcher: lowercase both, then substring or subsequence.
pub fn oracle_matches(token: &str, key: &str) -> bool {
    let token = token.to_lowercase();
    let key = key.to_lowercase();
    if token.is_empty() {
        return key.trim().is_empty();
    }
    let t: Vec<char> = token.chars().collect();
    let k: Vec<char> = key.chars().collect();
    key.contains(&token) || oracle_subsequence(&t, &k)
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Short lowercase-ish words over a small alphabet, so collisions happen.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E]{1,6}").unwrap()
}

pub fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

pub fn kind_strategy() -> impl Strategy<Value = ResultType> {
    prop::sample::select(ResultType::ALL.to_vec())
}

pub fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["dps", "tank", "healer", "pvp"]).prop_map(str::to_string),
        0..3,
    )
}

/// A catalog with unique ids and possibly repeated titles.
pub fn catalog_strategy() -> impl Strategy<Value = Vec<SearchResult>> {
    prop::collection::vec(
        (title_strategy(), kind_strategy(), 0u32..100, tags_strategy()),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, kind, relevance, tags))| {
                SearchResult::new(format!("r{i}"), title, kind)
                    .with_relevance(f64::from(relevance))
                    .with_tags(tags)
            })
            .collect()
    })
}

#[test]
fn oracle_sanity() {
    assert!(oracle_matches("wr", "Warrior"));
    assert!(!oracle_matches("rw", "Warrior"));
    assert!(oracle_matches("", "  "));
    assert!(!oracle_matches("", "x"));
}
