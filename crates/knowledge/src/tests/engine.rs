//! Ranking and build properties of the engine.

use crate::corpus::reference_monuments;
use crate::normalize::normalize;
use crate::{AskOptions, MonumentRecord, QnaEngine, RetrievalConfig};
use monuqa_core::AppError;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    const QUERIES: &[&str] = &[
        "When was Charles Bridge built?",
        "gothic bridge charles",
        "Prague Castle",
        "baroque statues",
        "Where is the clock?",
        "emperor",
        "",
    ];

    fn engine() -> QnaEngine {
        QnaEngine::build(reference_monuments(), &RetrievalConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let result = QnaEngine::build(Vec::new(), &RetrievalConfig::default());
        assert!(matches!(result, Err(AppError::EmptyCorpus)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RetrievalConfig {
            max_df: 0.0,
            ..RetrievalConfig::default()
        };
        let result = QnaEngine::build(reference_monuments(), &config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_odd_records_normalize() {
        let records = vec![
            MonumentRecord::new(),
            MonumentRecord::from(json!({
                "name": null,
                "description": {"text": "Nested description"},
                "notable_figures": [["Charles IV"], {"name": "Rudolf II"}, null],
                "construction_year": 1410,
            })),
            MonumentRecord::from(json!("Powder Tower")),
        ];

        for record in &records {
            let (text, _) = normalize(record);
            assert!(!text.is_empty());
        }

        let engine = QnaEngine::build(records, &RetrievalConfig::default()).unwrap();
        assert_eq!(engine.documents().len(), 3);
        assert_eq!(engine.documents()[2].fields.name, "Powder Tower");
    }

    #[test]
    fn test_single_record_corpus() {
        let records = vec![MonumentRecord::from(json!({
            "name": "Dancing House",
            "description": "A deconstructivist office building on the river bank.",
        }))];
        let engine = QnaEngine::build(records, &RetrievalConfig::default()).unwrap();

        let results = engine.rank("dancing house");
        assert_eq!(results.len(), 1);
        assert!(results[0].boosted);
        assert!(results[0].similarity > 0.0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = engine();
        let second = engine();

        for query in QUERIES {
            assert_eq!(first.rank(query), second.rank(query), "query {:?}", query);
        }
    }

    #[test]
    fn test_scores_above_threshold_and_sorted() {
        let engine = engine();

        for query in QUERIES {
            let results = engine.rank_top(query, 5);
            assert!(results.iter().all(|r| r.score > 0.01));

            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    assert!(pair[0].document_id < pair[1].document_id);
                }
            }
        }
    }

    #[test]
    fn test_boost_added_once() {
        let engine = engine();
        let boost = engine.config().keyword_boost;

        for result in engine.rank_top("gothic bridge charles stone", 5) {
            let expected = if result.boosted {
                result.similarity + boost
            } else {
                result.similarity
            };
            assert!((result.score - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_similarity_in_unit_range() {
        let engine = engine();
        for query in QUERIES {
            for result in engine.rank_top(query, 5) {
                assert!((0.0..=1.0).contains(&result.similarity));
            }
        }
    }

    #[test]
    fn test_ask_respects_top_k() {
        let engine = engine();

        let response = engine.ask(AskOptions::new("gothic").with_top_k(1));
        assert_eq!(response.monument_count(), 1);

        let response = engine.ask(AskOptions::new("gothic").with_top_k(5));
        assert!(response.monument_count() > 1);
        assert!(response.results[0].score >= response.results[1].score);
    }

    #[test]
    fn test_empty_question_is_not_an_error() {
        let response = engine().answer("   ");
        assert!(!response.has_results());
    }

    #[test]
    fn test_stats() {
        let stats = engine().stats();
        assert_eq!(stats.records_count, 5);
        assert!(stats.vocabulary_size > 0);
        assert!(stats.vocabulary_size <= 2000);
        assert!(stats.keywords_count > 0);
    }

    #[test]
    fn test_concurrent_readers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QnaEngine>();

        let engine = engine();
        let expected = engine.answer("When was Charles Bridge built?").answer;

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let response = engine.answer("When was Charles Bridge built?");
                    assert_eq!(response.answer, expected);
                });
            }
        });
    }
}
