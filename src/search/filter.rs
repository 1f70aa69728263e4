// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filtering.
//!
//! Facets AND together; `tags` is OR within itself. An absent facet and an
//! empty facet both mean "no constraint". `difficulty` is carried on the query
//! but not consulted.

use crate::types::{SearchFilters, SearchResult};

/// Does `result` survive every facet in `filters`?
pub fn passes(result: &SearchResult, filters: &SearchFilters) -> bool {
    let type_ok = match &filters.types {
        Some(types) if !types.is_empty() => types.contains(&result.kind),
        _ => true,
    };

    let tags_ok = match &filters.tags {
        Some(tags) if !tags.is_empty() => tags.iter().any(|tag| result.tags.contains(tag)),
        _ => true,
    };

    type_ok && tags_ok
}

/// Keep only the results that pass, preserving order.
pub fn apply<'a>(results: Vec<&'a SearchResult>, filters: &SearchFilters) -> Vec<&'a SearchResult> {
    if filters.is_unconstrained() {
        return results;
    }
    results.into_iter().filter(|r| passes(r, filters)).collect()
}
