// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded, most-recent-first query history.
//!
//! # Invariants
//!
//! - no duplicate strings (re-recording moves an entry to the front)
//! - `len() <= capacity()`; the oldest entry is evicted first
//! - every recorded text is kept verbatim, blank strings included

use crate::config::DEFAULT_HISTORY_CAPACITY;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from a most-recent-first list, e.g. a loaded snapshot.
    ///
    /// Later duplicates are dropped, then the list is truncated to `capacity`.
    pub fn from_entries<I, S>(entries: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::with_capacity(capacity);
        for entry in entries {
            if history.entries.len() == history.capacity {
                break;
            }
            let entry = entry.into();
            if history.entries.contains(&entry) {
                continue;
            }
            history.entries.push_back(entry);
        }
        history
    }

    /// Put `text` at the front. Existing copies move rather than duplicate.
    pub fn record(&mut self, text: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e == text) {
            if let Some(existing) = self.entries.remove(pos) {
                self.entries.push_front(existing);
            }
            return;
        }
        self.entries.push_front(text.to_string());
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::trace!(query = %evicted, "evicted from history");
            }
        }
    }

    /// Most-recent-first copy of the history.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Up to `limit` entries containing `text`, case-insensitively, in
    /// history order.
    pub fn suggestions(&self, text: &str, limit: usize) -> Vec<String> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    /// The `n` most recent entries.
    pub fn recent(&self, n: usize) -> Vec<String> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
