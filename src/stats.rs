// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only reporting figures derived from the index and history.

use crate::history::SearchHistory;
use crate::index::InvertedIndex;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Distinct normalized titles
    pub indexed_key_count: usize,
    /// Results across all keys
    pub indexed_result_count: usize,
    pub history_length: usize,
    /// Most recent queries, newest first
    pub recent_queries: Vec<String>,
}

impl SearchStats {
    pub fn collect(index: &InvertedIndex, history: &SearchHistory, top_n: usize) -> Self {
        Self {
            indexed_key_count: index.size(),
            indexed_result_count: index.len(),
            history_length: history.len(),
            recent_queries: history.recent(top_n),
        }
    }
}
