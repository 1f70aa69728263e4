// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full search pipeline.
//!
//! Random catalogs, random queries, random pagination. The engine is total,
//! so nothing here may panic, and every page must respect the ranking and
//! pagination invariants.

#![no_main]

use arbitrary::Arbitrary;
use fuzzdex::{ResultType, SearchEngine, SearchQuery, SearchResult};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
struct Row {
    id: u8,
    title: String,
    kind: u8,
    relevance: f64,
    tag: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    rows: Vec<Row>,
    query: String,
    offset: usize,
    limit: Option<usize>,
    only_type: Option<u8>,
}

fuzz_target!(|input: Input| {
    if input.rows.len() > 64 || input.query.len() > 200 {
        return;
    }

    let mut engine = SearchEngine::new();
    for row in input.rows {
        let kind = ResultType::ALL[row.kind as usize % ResultType::ALL.len()];
        let mut result =
            SearchResult::new(row.id.to_string(), row.title, kind).with_relevance(row.relevance);
        if let Some(tag) = row.tag {
            result = result.with_tags([tag]);
        }
        engine.index_result(result);
    }

    let mut query = SearchQuery::new(input.query.as_str()).with_offset(input.offset);
    if let Some(limit) = input.limit {
        query = query.with_limit(limit);
    }
    if let Some(t) = input.only_type {
        query = query.with_types([ResultType::ALL[t as usize % ResultType::ALL.len()]]);
    }

    // INVARIANT 1: search() never panics
    let page = engine.search_page(&query);

    // INVARIANT 2: bounded by limit and by what's left after offset
    if let Some(limit) = input.limit {
        assert!(page.results.len() <= limit);
    }
    assert!(page.results.len() <= page.total_matches.saturating_sub(input.offset));

    // INVARIANT 3: unique ids, non-increasing relevance, no negatives
    let unique: HashSet<_> = page.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(unique.len(), page.results.len());
    for pair in page.results.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
    assert!(page.results.iter().all(|r| r.relevance >= 0.0));

    // INVARIANT 4: history got the raw query, blank or not
    assert_eq!(engine.history().first(), Some(&input.query));
});
