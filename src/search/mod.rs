// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter & rank pipeline: where the rubber meets the road.
//!
//! Fixed order, every time:
//!
//! 1. tokenize, gather candidates per token (OR across tokens)
//! 2. dedup by `id`, first occurrence wins
//! 3. facet filters
//! 4. stable sort by relevance, descending
//! 5. paginate
//!
//! History recording is the facade's job, not this module's. The pipeline
//! is a pure function of the index and the query.

pub mod dedup;
pub mod filter;
pub mod ranking;

use crate::index::InvertedIndex;
use crate::tokenizer::Tokenizer;
use crate::types::{SearchQuery, SearchResult};
use dedup::CandidateSet;
use serde::Serialize;

/// One page of ranked results plus the size of the full ranked list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    /// Matches after filtering, before pagination
    pub total_matches: usize,
    pub offset: usize,
}

/// Run `query` against `index`.
///
/// Total over its input: blank text, unknown facets and out-of-range offsets
/// all produce an empty page rather than an error.
pub fn execute(index: &InvertedIndex, tokenizer: &Tokenizer, query: &SearchQuery) -> SearchPage {
    let tokens = tokenizer.tokenize(&query.text);

    let mut candidates = CandidateSet::new();
    for token in &tokens {
        candidates.merge_all(index.matching_entries(token));
    }
    let candidate_count = candidates.len();

    let mut ranked = filter::apply(candidates.into_ordered(), &query.filters);
    ranking::rank(&mut ranked);

    let total_matches = ranked.len();
    let results: Vec<SearchResult> = paginate(ranked, query.offset, query.limit)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        tokens = tokens.len(),
        candidates = candidate_count,
        matches = total_matches,
        returned = results.len(),
        "search executed"
    );

    SearchPage {
        results,
        total_matches,
        offset: query.offset,
    }
}

/// Slice `[offset, offset + limit)`, or `[offset, ..)` without a limit.
///
/// An offset past the end yields an empty vec. `skip`/`take` never compute
/// `offset + limit`, so huge values can't overflow.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: Option<usize>) -> Vec<T> {
    let take = limit.unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(take).collect()
}
