//! Relevance ordering and tie stability.

use crate::common::*;
use fuzzdex::{ResultType, SearchQuery};

#[test]
fn higher_relevance_first() {
    let mut engine = mixed_engine();
    let results = engine.search(&SearchQuery::new("warrior"));
    let relevances: Vec<f64> = results.iter().map(|r| r.relevance).collect();
    assert_eq!(relevances, vec![50.0, 20.0, 15.0, 10.0]);
}

#[test]
fn ties_keep_insertion_order() {
    let mut engine = mixed_engine();
    assert_eq!(ids(&engine.search(&SearchQuery::new("protection"))), vec!["s1", "s2"]);
    let dungeons = engine.search(&SearchQuery::new("s").with_types([ResultType::Dungeon]));
    assert_eq!(ids(&dungeons), vec!["d1", "d2"]);
}

#[test]
fn tie_order_follows_insertion_not_key() {
    // "zeta" sorts after "alpha" but was indexed first
    let mut engine = engine_with(vec![
        make_result("z", "Zeta Guide", 1.0),
        make_result("a", "Alpha Guide", 1.0),
    ]);
    assert_eq!(ids(&engine.search(&SearchQuery::new("guide"))), vec!["z", "a"]);
}

#[test]
fn ranking_is_deterministic() {
    let mut engine = mixed_engine();
    let first = owned_ids(&engine.search(&SearchQuery::new("a")));
    for _ in 0..5 {
        assert_eq!(owned_ids(&engine.search(&SearchQuery::new("a"))), first);
    }
}

#[test]
fn negative_relevance_is_clamped() {
    let mut engine = engine_with(vec![
        make_result("neg", "Broken Guide", -5.0),
        make_result("nan", "Odd Guide", f64::NAN),
        make_result("ok", "Fine Guide", 1.0),
    ]);
    let results = engine.search(&SearchQuery::new("guide"));
    assert_eq!(ids(&results), vec!["ok", "neg", "nan"]);
    assert!(results.iter().all(|r| r.relevance >= 0.0));
}

#[test]
fn signed_zero_relevance_ties_keep_insertion_order() {
    let mut engine = engine_with(vec![
        make_result("first", "First Guide", -0.0),
        make_result("second", "Second Guide", 0.0),
    ]);
    assert_eq!(ids(&engine.search(&SearchQuery::new("guide"))), vec!["first", "second"]);
}
