//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ResultType, SearchResult};

/// Create a guide result with no tags.
///
/// This is the canonical implementation used across all tests.
pub fn make_result(id: &str, title: &str, relevance: f64) -> SearchResult {
    SearchResult::new(id, title, ResultType::Guide)
        .with_description(format!("Description for {}", title))
        .with_relevance(relevance)
}

/// Create a result with an explicit type and tags.
pub fn make_tagged_result(
    id: &str,
    title: &str,
    kind: ResultType,
    relevance: f64,
    tags: &[&str],
) -> SearchResult {
    make_result(id, title, relevance)
        .with_tags(tags.iter().copied())
        .with_kind(kind)
}

/// The two-guide catalog used by the end-to-end scenarios.
pub fn warrior_guides() -> Vec<SearchResult> {
    vec![
        make_tagged_result("a", "Arms Warrior Guide", ResultType::Guide, 10.0, &["dps"]),
        make_tagged_result("b", "Fury Warrior Guide", ResultType::Guide, 20.0, &["dps"]),
    ]
}

/// Collect ids, for compact assertions.
pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}
