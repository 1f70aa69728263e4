// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! One key only: caller-supplied `relevance`, descending. Ties are left in
//! input order, which the pipeline arranges to be index insertion order, so
//! the sort must be stable.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two results for ranking: higher relevance first.
///
/// Uses `total_cmp`, so the order is total even if a NaN slipped past the
/// index (it can't, relevance is clamped on insert).
pub fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.relevance.total_cmp(&a.relevance)
}

/// Stable sort by [`compare`].
pub fn rank(results: &mut [&SearchResult]) {
    results.sort_by(|a, b| compare(a, b));
}
