//! In-memory fuzzy search and faceted ranking for content catalogs.
//!
//! Callers index `SearchResult`s, then ask for ranked, filtered, paginated
//! pages. Matching is substring-first with an in-order subsequence fallback,
//! so "wrr" finds "Warrior". Ranking uses caller-supplied relevance only.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────────────────┐
//! │ tokenizer.rs │──▶│  index/      │──▶│  search/                  │
//! │ (tokenize)   │   │ (Inverted-   │   │ dedup → filter → ranking  │
//! └──────────────┘   │  Index)      │   │ → paginate                │
//!        │           └──────┬───────┘   └─────────────┬─────────────┘
//!        │                  │ fuzzy/                  │
//!        ▼                  ▼                         ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ engine.rs  (SearchEngine: owns index + history, records queries) │
//! └──────────────────────────────────────────────────────────────────┘
//!        │                  │                         │
//!        ▼                  ▼                         ▼
//!   history.rs          stats.rs          shared.rs / snapshot.rs
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzzdex::{ResultType, SearchEngine, SearchQuery, SearchResult};
//!
//! let mut engine = SearchEngine::new();
//! engine.index_result(
//!     SearchResult::new("a", "Arms Warrior Guide", ResultType::Guide).with_relevance(10.0),
//! );
//! engine.index_result(
//!     SearchResult::new("b", "Fury Warrior Guide", ResultType::Guide).with_relevance(20.0),
//! );
//!
//! let page = engine.search(&SearchQuery::new("warrior"));
//! let ids: Vec<_> = page.iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, vec!["b", "a"]);
//! assert_eq!(engine.history(), vec!["warrior"]);
//! ```

pub mod config;
mod engine;
pub mod error;
pub mod fuzzy;
mod history;
mod index;
pub mod search;
mod shared;
pub mod snapshot;
mod stats;
pub mod testing;
mod tokenizer;
mod types;

// Re-exports for public API
pub use config::EngineConfig;
pub use engine::SearchEngine;
pub use error::{FuzzdexError, Result};
pub use fuzzy::{classify, matches, MatchKind};
pub use history::SearchHistory;
pub use index::{InvertedIndex, DEFAULT_PARALLEL_THRESHOLD};
pub use search::SearchPage;
pub use shared::SharedEngine;
pub use stats::SearchStats;
pub use tokenizer::{tokenize, Tokenizer};
pub use types::{
    ResultType, SearchFilters, SearchQuery, SearchResult, UnknownResultType,
};
