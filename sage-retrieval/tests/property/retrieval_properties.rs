use proptest::prelude::*;
use sage_core::models::KnowledgeId;
use sage_retrieval::keyword::{overlap_score, rank_by_overlap};
use sage_retrieval::tokenize::distinct_lowercase;
use sage_retrieval::VectorIndex;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{2,8}", 1..6)
}

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec("[a-z]{2,8}", 1..10).prop_map(|w| w.join(" ")),
        0..12,
    )
}

proptest! {
    #[test]
    fn vector_search_is_non_increasing(docs in corpus(), query in "[a-z ]{0,40}") {
        let mut index = VectorIndex::new();
        index.rebuild(
            docs.iter()
                .enumerate()
                .map(|(i, d)| (KnowledgeId::new(i as u64 + 1), d.clone())),
        );
        let hits = index.search(&query, 5);
        prop_assert!(hits.len() <= 5);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        for (_, sim) in &hits {
            prop_assert!((0.0..=1.0).contains(sim));
        }
    }

    #[test]
    fn empty_index_never_matches(query in ".{0,60}") {
        let index = VectorIndex::new();
        prop_assert!(index.search(&query, 3).is_empty());
    }

    #[test]
    fn record_with_all_tokens_scores_every_token(tokens in words(), filler in "[a-z ]{0,30}") {
        let distinct = distinct_lowercase(&tokens);
        let text = format!("{} {}", filler, tokens.join(" "));
        prop_assert_eq!(overlap_score(&distinct, &text), distinct.len());
    }

    #[test]
    fn adding_matching_record_never_lowers_its_score(docs in corpus(), tokens in words()) {
        let before: Vec<String> = docs.clone();
        let mut after = docs;
        let newcomer = tokens.join(" ");
        after.push(newcomer.clone());

        let before_best = rank_by_overlap(&before, &tokens, |s| s.clone(), usize::MAX)
            .iter()
            .filter(|h| *h.item == newcomer)
            .map(|h| h.score)
            .max()
            .unwrap_or(0);
        let after_hits = rank_by_overlap(&after, &tokens, |s| s.clone(), usize::MAX);
        let after_best = after_hits
            .iter()
            .filter(|h| *h.item == newcomer)
            .map(|h| h.score)
            .max()
            .unwrap_or(0);

        prop_assert!(after_best >= before_best);
        prop_assert_eq!(after_best, distinct_lowercase(&tokens).len());
    }

    #[test]
    fn keyword_ranking_is_sorted_and_positive(docs in corpus(), tokens in words(), limit in 0usize..8) {
        let hits = rank_by_overlap(&docs, &tokens, |s| s.clone(), limit);
        prop_assert!(hits.len() <= limit);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        prop_assert!(hits.iter().all(|h| h.score > 0));
    }
}
