// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyed buckets of search results.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **UNIQUE_ID**: an `id` appears at most once across all buckets
//! 2. **NON_EMPTY**: every bucket holds at least one entry (so `size()` is the
//!    distinct-key count)
//! 3. **INSERTION_ORDER**: entry sequence numbers strictly increase in
//!    insertion order; lookups return results sorted by them
//! 4. **SLOTS_CONSISTENT**: `slots[key]` is the position of `key` in `buckets`

use crate::fuzzy::classify_normalized;
use crate::tokenizer::Tokenizer;
use crate::types::SearchResult;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Scan stays sequential below this many distinct keys.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// A result plus its insertion sequence number.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) seq: u64,
    pub(crate) result: SearchResult,
}

#[derive(Debug, Clone)]
struct Bucket {
    key: String,
    entries: Vec<Entry>,
}

/// Mapping from normalized title to the results registered under it.
///
/// Collisions are kept: two results titled "Fury Warrior Guide" share a bucket
/// and both come back from a lookup.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    tokenizer: Tokenizer,
    buckets: Vec<Bucket>,
    slots: HashMap<String, usize>,
    /// id → bucket key, for idempotency and removal
    ids: HashMap<String, String>,
    next_seq: u64,
    parallel_threshold: usize,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}

impl InvertedIndex {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            buckets: Vec::new(),
            slots: HashMap::new(),
            ids: HashMap::new(),
            next_seq: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Distinct-key count at which lookups scan in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Register a result under its normalized title.
    ///
    /// Returns `false` (and changes nothing) if a result with the same `id` is
    /// already indexed. Negative or NaN relevance is clamped to zero.
    pub fn index(&mut self, mut result: SearchResult) -> bool {
        if self.ids.contains_key(&result.id) {
            tracing::debug!(id = %result.id, "skipping already-indexed result");
            return false;
        }

        // NaN fails this comparison too
        if !(result.relevance >= 0.0) {
            tracing::warn!(
                id = %result.id,
                relevance = result.relevance,
                "clamping invalid relevance to 0"
            );
            result.relevance = 0.0;
        } else if result.relevance == 0.0 {
            // -0.0 sorts below 0.0 under total_cmp
            result.relevance = 0.0;
        }

        let key = self.tokenizer.normalize(&result.title);
        let entry = Entry {
            seq: self.next_seq,
            result,
        };
        self.next_seq += 1;
        self.ids.insert(entry.result.id.clone(), key.clone());

        tracing::trace!(id = %entry.result.id, key = %key, seq = entry.seq, "indexed");

        match self.slots.get(&key) {
            Some(&slot) => self.buckets[slot].entries.push(entry),
            None => {
                self.slots.insert(key.clone(), self.buckets.len());
                self.buckets.push(Bucket {
                    key,
                    entries: vec![entry],
                });
            }
        }
        true
    }

    /// Drop a result by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<SearchResult> {
        let key = self.ids.remove(id)?;
        let slot = *self.slots.get(&key)?;

        let bucket = &mut self.buckets[slot];
        let pos = bucket.entries.iter().position(|e| e.result.id == id)?;
        let removed = bucket.entries.remove(pos).result;

        if bucket.entries.is_empty() {
            self.buckets.remove(slot);
            self.slots.remove(&key);
            for (i, bucket) in self.buckets.iter().enumerate().skip(slot) {
                self.slots.insert(bucket.key.clone(), i);
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&SearchResult> {
        let key = self.ids.get(id)?;
        let slot = *self.slots.get(key)?;
        self.buckets[slot]
            .entries
            .iter()
            .find(|e| e.result.id == id)
            .map(|e| &e.result)
    }

    /// All results whose key fuzzy-matches `token`, in insertion order.
    pub fn lookup_candidates(&self, token: &str) -> Vec<&SearchResult> {
        self.matching_entries(token)
            .into_iter()
            .map(|e| &e.result)
            .collect()
    }

    /// Same as [`lookup_candidates`](Self::lookup_candidates), keeping the
    /// sequence numbers the pipeline uses to merge tokens.
    pub(crate) fn matching_entries(&self, token: &str) -> Vec<&Entry> {
        let token = self.tokenizer.normalize(token);
        let mut entries: Vec<&Entry> = self
            .matching_slots(&token)
            .into_iter()
            .flat_map(|slot| self.buckets[slot].entries.iter())
            .collect();
        entries.sort_unstable_by_key(|e| e.seq);
        entries
    }

    #[cfg(feature = "parallel")]
    fn matching_slots(&self, token: &str) -> Vec<usize> {
        if self.buckets.len() < self.parallel_threshold {
            return self.matching_slots_sequential(token);
        }
        self.buckets
            .par_iter()
            .enumerate()
            .filter(|(_, bucket)| classify_normalized(token, &bucket.key).is_some())
            .map(|(slot, _)| slot)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn matching_slots(&self, token: &str) -> Vec<usize> {
        self.matching_slots_sequential(token)
    }

    fn matching_slots_sequential(&self, token: &str) -> Vec<usize> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| classify_normalized(token, &bucket.key).is_some())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Every indexed result, in insertion order.
    pub fn results(&self) -> Vec<&SearchResult> {
        let mut entries: Vec<&Entry> = self.buckets.iter().flat_map(|b| b.entries.iter()).collect();
        entries.sort_unstable_by_key(|e| e.seq);
        entries.into_iter().map(|e| &e.result).collect()
    }

    /// Distinct keys, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().map(|b| b.key.as_str())
    }

    /// Number of distinct keys.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Number of indexed results.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.slots.clear();
        self.ids.clear();
        self.next_seq = 0;
    }
}
