// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thread-shareable engine handle.
//!
//! `SearchEngine` has no locks of its own. Hosts that share one catalog across
//! threads wrap it here: writers (`index_result`, `search`, the `clear_*`
//! calls) take the write lock, readers (`history`, `suggestions`, `stats`)
//! share the read lock. `search` is a writer because it records history.

use crate::engine::SearchEngine;
use crate::stats::SearchStats;
use crate::types::{SearchQuery, SearchResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one engine. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedEngine {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<SearchResult> {
        self.inner.write().search(query)
    }

    pub fn index_result(&self, result: SearchResult) -> bool {
        self.inner.write().index_result(result)
    }

    pub fn index_results<I>(&self, results: I) -> usize
    where
        I: IntoIterator<Item = SearchResult>,
    {
        self.inner.write().index_results(results)
    }

    pub fn clear_index(&self) {
        self.inner.write().clear_index();
    }

    pub fn clear_history(&self) {
        self.inner.write().clear_history();
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.read().history()
    }

    pub fn suggestions(&self, text: &str, limit: Option<usize>) -> Vec<String> {
        self.inner.read().suggestions(text, limit)
    }

    pub fn stats(&self) -> SearchStats {
        self.inner.read().stats()
    }

    /// Run `f` with shared access, for reads not covered above.
    pub fn with_read<R>(&self, f: impl FnOnce(&SearchEngine) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut SearchEngine) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<SearchEngine> for SharedEngine {
    fn from(engine: SearchEngine) -> Self {
        Self::new(engine)
    }
}
