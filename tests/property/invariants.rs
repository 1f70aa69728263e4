//! Pipeline invariants over random catalogs.

use crate::oracles::{catalog_strategy, oracle_matches, word_strategy};
use fuzzdex::{ResultType, SearchEngine, SearchQuery, SearchResult};
use proptest::prelude::*;
use std::collections::HashSet;

fn engine_over(catalog: &[SearchResult]) -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.index_results(catalog.iter().cloned());
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn results_are_unique(catalog in catalog_strategy(), a in word_strategy(), b in word_strategy()) {
        let mut engine = engine_over(&catalog);
        let results = engine.search(&SearchQuery::new(format!("{a} {b} {a}")));
        let unique: HashSet<_> = results.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn results_are_exactly_the_oracle_matches(catalog in catalog_strategy(), token in word_strategy()) {
        let mut engine = engine_over(&catalog);
        let got: HashSet<String> = engine
            .search(&SearchQuery::new(token.clone()))
            .into_iter()
            .map(|r| r.id)
            .collect();
        let expected: HashSet<String> = catalog
            .iter()
            .filter(|r| oracle_matches(&token, &r.title))
            .map(|r| r.id.clone())
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn ranking_is_descending_and_stable(catalog in catalog_strategy(), token in word_strategy()) {
        let mut engine = engine_over(&catalog);
        let results = engine.search(&SearchQuery::new(token));
        let position = |id: &str| catalog.iter().position(|r| r.id == id);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
            if pair[0].relevance == pair[1].relevance {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }

    #[test]
    fn pagination_is_a_window_of_the_full_list(
        catalog in catalog_strategy(),
        token in word_strategy(),
        offset in 0usize..25,
        limit in 0usize..10,
    ) {
        let mut engine = engine_over(&catalog);
        let full = engine.search(&SearchQuery::new(token.clone()));
        let page = engine.search(&SearchQuery::new(token).with_offset(offset).with_limit(limit));
        prop_assert!(page.len() <= limit);
        let expected: Vec<_> = full.iter().skip(offset).take(limit).cloned().collect();
        prop_assert_eq!(page, expected);
    }

    #[test]
    fn filters_only_remove(catalog in catalog_strategy(), token in word_strategy()) {
        let mut engine = engine_over(&catalog);
        let all = engine.search(&SearchQuery::new(token.clone()));
        let guides = engine.search(&SearchQuery::new(token.clone()).with_types([ResultType::Guide]));
        let tanks = engine.search(&SearchQuery::new(token).with_tags(["tank"]));

        prop_assert!(guides.iter().all(|r| r.kind == ResultType::Guide));
        prop_assert!(tanks.iter().all(|r| r.tags.contains("tank")));

        let expected_guides: Vec<_> = all.iter().filter(|r| r.kind == ResultType::Guide).cloned().collect();
        prop_assert_eq!(guides, expected_guides);
    }

    #[test]
    fn indexing_is_idempotent(catalog in catalog_strategy(), token in word_strategy()) {
        let mut once = engine_over(&catalog);
        let mut twice = engine_over(&catalog);
        prop_assert_eq!(twice.index_results(catalog.iter().cloned()), 0);
        prop_assert_eq!(once.stats().indexed_result_count, twice.stats().indexed_result_count);
        prop_assert_eq!(
            once.search(&SearchQuery::new(token.clone())),
            twice.search(&SearchQuery::new(token))
        );
    }
}
