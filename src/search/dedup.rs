// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate deduplication across query tokens.
//!
//! A multi-token query can surface the same result once per token ("fury
//! warrior" hits "Fury Warrior Guide" twice). `CandidateSet` keys on `id` only
//! and keeps the first occurrence, so each result appears at most once.
//!
//! **Invariant**: each `id` appears at most once in the merged candidates, and
//! the merged order is index insertion order.

use crate::index::Entry;
use crate::types::SearchResult;
use std::collections::HashSet;

/// Union of per-token candidates, deduplicated by `id`.
#[derive(Debug, Default)]
pub struct CandidateSet<'a> {
    seen: HashSet<&'a str>,
    entries: Vec<&'a Entry>,
}

impl<'a> CandidateSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one candidate. Returns `false` if its `id` was already present.
    pub(crate) fn merge(&mut self, entry: &'a Entry) -> bool {
        if !self.seen.insert(entry.result.id.as_str()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub(crate) fn merge_all(&mut self, entries: impl IntoIterator<Item = &'a Entry>) {
        for entry in entries {
            self.merge(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Candidates in index insertion order, which is the input order the
    /// stable ranking sort preserves for ties.
    pub fn into_ordered(mut self) -> Vec<&'a SearchResult> {
        self.entries.sort_unstable_by_key(|e| e.seq);
        self.entries.into_iter().map(|e| &e.result).collect()
    }
}
