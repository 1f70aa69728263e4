//! History invariants under random query streams.

use fuzzdex::SearchHistory;
use proptest::prelude::*;
use std::collections::HashSet;

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d ]{0,4}").unwrap()
}

proptest! {
    #[test]
    fn history_stays_bounded_and_unique(
        queries in prop::collection::vec(query_strategy(), 0..120),
        capacity in 1usize..60,
    ) {
        let mut history = SearchHistory::with_capacity(capacity);
        for q in &queries {
            history.record(q);
        }
        let entries = history.entries();
        prop_assert!(entries.len() <= capacity);
        let unique: HashSet<_> = entries.iter().collect();
        prop_assert_eq!(unique.len(), entries.len());
        prop_assert!(entries.iter().all(|e| queries.contains(e)));
    }

    #[test]
    fn last_recorded_query_is_first(
        queries in prop::collection::vec(query_strategy(), 1..50),
    ) {
        let mut history = SearchHistory::default();
        for q in &queries {
            history.record(q);
        }
        let entries = history.entries();
        prop_assert_eq!(entries.first(), queries.last());
    }

    #[test]
    fn suggestions_are_a_filtered_prefix(
        queries in prop::collection::vec(query_strategy(), 0..40),
        needle in "[a-d]{0,2}",
        limit in 0usize..8,
    ) {
        let mut history = SearchHistory::default();
        for q in &queries {
            history.record(q);
        }
        let expected: Vec<String> = history
            .entries()
            .into_iter()
            .filter(|e| e.contains(&needle))
            .take(limit)
            .collect();
        prop_assert_eq!(history.suggestions(&needle, limit), expected);
    }
}
