// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the engine.
//!
//! `SearchResult` is what callers index and what searches return. `SearchQuery`
//! is one request: raw text, optional facet filters, optional page window.
//!
//! # Invariants
//!
//! - **SearchResult**: `id` is unique across an index. Indexing the same `id`
//!   twice is a no-op, never a second entry.
//! - **SearchResult**: `relevance >= 0.0`. The index clamps anything else.
//! - **SearchQuery**: `limit` and `offset` are `usize`, so non-negativity is
//!   structural. Pagination happens after ranking.
//! - **SearchFilters**: an absent facet means "no constraint", never "match
//!   nothing".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Content category of a result.
///
/// Serialized lowercase (`"guide"`, `"dungeon"`, ...). New categories may be
/// added, so downstream matches need a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ResultType {
    Guide,
    Class,
    Spec,
    Dungeon,
    Item,
}

impl ResultType {
    pub const ALL: [ResultType; 5] = [
        ResultType::Guide,
        ResultType::Class,
        ResultType::Spec,
        ResultType::Dungeon,
        ResultType::Item,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResultType::Guide => "guide",
            ResultType::Class => "class",
            ResultType::Spec => "spec",
            ResultType::Dungeon => "dungeon",
            ResultType::Item => "item",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized result type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResultType(pub String);

impl fmt::Display for UnknownResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown result type '{}' (expected one of: guide, class, spec, dungeon, item)",
            self.0
        )
    }
}

impl std::error::Error for UnknownResultType {}

impl FromStr for ResultType {
    type Err = UnknownResultType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ResultType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| UnknownResultType(s.to_string()))
    }
}

/// An indexed content item.
///
/// The `title` doubles as the index key source: it's lower-cased and used as
/// the bucket key in [`InvertedIndex`](crate::InvertedIndex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResultType,
    /// Caller-assigned base score, primary sort key
    #[serde(default)]
    pub relevance: f64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ResultType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            relevance: 0.0,
            tags: BTreeSet::new(),
            url: None,
        }
    }

    pub fn with_kind(mut self, kind: ResultType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_relevance(mut self, relevance: f64) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Facet filters. Each field is independently optional.
///
/// Facets combine with AND; within `tags` a single shared tag is enough (OR).
/// An empty set is treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeSet<ResultType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    /// Reserved facet. Carried through queries but not used for filtering yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl SearchFilters {
    /// True when no facet constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.types.as_ref().map_or(true, BTreeSet::is_empty)
            && self.tags.as_ref().map_or(true, BTreeSet::is_empty)
    }
}

/// A single search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = ResultType>,
    {
        self.filters.types = Some(types.into_iter().collect());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.filters.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}
