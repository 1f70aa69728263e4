//! Offset and limit.

use crate::common::*;
use fuzzdex::SearchQuery;

#[test]
fn window_in_the_middle() {
    let mut engine = mixed_engine();
    let results = engine.search(&SearchQuery::new("warrior").with_offset(1).with_limit(2));
    assert_eq!(ids(&results), vec!["b", "s1"]);
}

#[test]
fn offset_without_limit_returns_the_tail() {
    let mut engine = mixed_engine();
    let results = engine.search(&SearchQuery::new("warrior").with_offset(3));
    assert_eq!(ids(&results), vec!["a"]);
}

#[test]
fn offset_past_end_is_empty() {
    let mut engine = mixed_engine();
    let page = engine.search_page(&SearchQuery::new("warrior").with_offset(4));
    assert!(page.results.is_empty());
    assert_eq!(page.total_matches, 4);
}

#[test]
fn zero_limit_is_empty() {
    let mut engine = mixed_engine();
    assert!(engine
        .search(&SearchQuery::new("warrior").with_limit(0))
        .is_empty());
}

#[test]
fn huge_values_do_not_overflow() {
    let mut engine = mixed_engine();
    let results = engine.search(
        &SearchQuery::new("warrior")
            .with_offset(usize::MAX)
            .with_limit(usize::MAX),
    );
    assert!(results.is_empty());
    let all = engine.search(&SearchQuery::new("warrior").with_limit(usize::MAX));
    assert_eq!(all.len(), 4);
}

#[test]
fn pages_concatenate_to_full_list() {
    let mut engine = mixed_engine();
    let full = owned_ids(&engine.search(&SearchQuery::new("a")));
    let mut stitched = Vec::new();
    let mut offset = 0;
    loop {
        let page = engine.search(&SearchQuery::new("a").with_offset(offset).with_limit(3));
        if page.is_empty() {
            break;
        }
        offset += page.len();
        stitched.extend(owned_ids(&page));
    }
    assert_eq!(stitched, full);
}
