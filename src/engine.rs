// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine facade.
//!
//! `SearchEngine` owns the index and the history and is the only thing callers
//! need. There is no global instance: build one at startup and pass it around
//! (or wrap it in [`SharedEngine`](crate::SharedEngine) to share it across
//! threads). Every operation is synchronous, total, and does no I/O.

use crate::config::EngineConfig;
use crate::history::SearchHistory;
use crate::index::InvertedIndex;
use crate::search::{self, SearchPage};
use crate::stats::SearchStats;
use crate::tokenizer::Tokenizer;
use crate::types::{SearchQuery, SearchResult};

#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    tokenizer: Tokenizer,
    index: InvertedIndex,
    history: SearchHistory,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let tokenizer = Tokenizer::new(config.fold_diacritics);
        let index = InvertedIndex::new(tokenizer).with_parallel_threshold(config.parallel_scan_threshold);
        let history = SearchHistory::with_capacity(config.history_capacity);
        Self {
            config,
            tokenizer,
            index,
            history,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ranked page of results. Records the query text in history, even when
    /// nothing matches.
    pub fn search(&mut self, query: &SearchQuery) -> Vec<SearchResult> {
        self.search_page(query).results
    }

    /// Like [`search`](Self::search), with the pre-pagination match count.
    pub fn search_page(&mut self, query: &SearchQuery) -> SearchPage {
        self.history.record(&query.text);
        search::execute(&self.index, &self.tokenizer, query)
    }

    /// Index one result. Returns `false` if its `id` was already indexed.
    pub fn index_result(&mut self, result: SearchResult) -> bool {
        self.index.index(result)
    }

    /// Index many results, returning how many were new.
    pub fn index_results<I>(&mut self, results: I) -> usize
    where
        I: IntoIterator<Item = SearchResult>,
    {
        let mut inserted = 0;
        for result in results {
            if self.index.index(result) {
                inserted += 1;
            }
        }
        tracing::debug!(inserted, keys = self.index.size(), "bulk index");
        inserted
    }

    pub fn remove_result(&mut self, id: &str) -> Option<SearchResult> {
        self.index.remove(id)
    }

    pub fn clear_index(&mut self) {
        self.index.clear();
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Most-recent-first history.
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Replace history with a saved list (most-recent-first).
    pub fn restore_history(&mut self, entries: Vec<String>) {
        self.history = SearchHistory::from_entries(entries, self.config.history_capacity);
    }

    /// History entries containing `text`. `None` uses the configured default
    /// limit (5).
    pub fn suggestions(&self, text: &str, limit: Option<usize>) -> Vec<String> {
        self.history
            .suggestions(text, limit.unwrap_or(self.config.suggestion_limit))
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats::collect(&self.index, &self.history, self.config.stats_recent_queries)
    }
}
