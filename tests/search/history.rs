//! History recording, eviction and suggestions through the engine.

use crate::common::*;
use fuzzdex::{EngineConfig, SearchEngine, SearchQuery};

#[test]
fn every_search_is_recorded_newest_first() {
    let mut engine = warrior_engine();
    engine.search(&SearchQuery::new("arms"));
    engine.search(&SearchQuery::new("no such thing"));
    engine.search(&SearchQuery::new("fury"));
    assert_eq!(engine.history(), vec!["fury", "no such thing", "arms"]);
}

#[test]
fn repeated_query_moves_to_front() {
    let mut engine = warrior_engine();
    for q in ["a", "b", "c", "a"] {
        engine.search(&SearchQuery::new(q));
    }
    assert_eq!(engine.history(), vec!["a", "c", "b"]);
}

#[test]
fn fifty_first_query_evicts_the_oldest() {
    let mut engine = SearchEngine::new();
    for i in 0..51 {
        engine.search(&SearchQuery::new(format!("query {i}")));
    }
    let history = engine.history();
    assert_eq!(history.len(), 50);
    assert_eq!(history[0], "query 50");
    assert_eq!(history[49], "query 1");
    assert!(!history.contains(&"query 0".to_string()));
}

#[test]
fn configured_capacity_is_honored() {
    let mut engine = SearchEngine::with_config(EngineConfig {
        history_capacity: 3,
        ..EngineConfig::default()
    });
    for q in ["one", "two", "three", "four"] {
        engine.search(&SearchQuery::new(q));
    }
    assert_eq!(engine.history(), vec!["four", "three", "two"]);
}

#[test]
fn blank_queries_are_recorded_once_per_call() {
    let mut engine = warrior_engine();
    assert!(engine.search(&SearchQuery::new("")).is_empty());
    assert!(engine.search(&SearchQuery::new("   ")).is_empty());
    assert_eq!(engine.history(), vec!["   ", ""]);

    engine.search(&SearchQuery::new(""));
    assert_eq!(engine.history(), vec!["", "   "]);
}

#[test]
fn suggestions_are_case_insensitive_and_limited() {
    let mut engine = warrior_engine();
    for q in ["Fury Warrior", "deadmines", "arms warrior", "WARRIOR pvp"] {
        engine.search(&SearchQuery::new(q));
    }
    assert_eq!(
        engine.suggestions("warrior", None),
        vec!["WARRIOR pvp", "arms warrior", "Fury Warrior"]
    );
    assert_eq!(engine.suggestions("Warrior", Some(1)), vec!["WARRIOR pvp"]);
    assert!(engine.suggestions("raid", None).is_empty());
}

#[test]
fn clear_history_leaves_index_alone() {
    let mut engine = warrior_engine();
    engine.search(&SearchQuery::new("warrior"));
    engine.clear_history();
    assert!(engine.history().is_empty());
    assert_eq!(engine.stats().indexed_result_count, 2);
}

#[test]
fn stats_report_recent_queries() {
    let mut engine = warrior_engine();
    for i in 0..8 {
        engine.search(&SearchQuery::new(format!("q{i}")));
    }
    let stats = engine.stats();
    assert_eq!(stats.history_length, 8);
    assert_eq!(stats.recent_queries, vec!["q7", "q6", "q5", "q4", "q3"]);
    assert_eq!(stats.indexed_key_count, 2);
}
