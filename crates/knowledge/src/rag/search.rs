//! Hybrid ranking for question answering.
//!
//! Combines vector similarity with lexical keyword overlap:
//!
//! 1. Score every document against the raw question (cosine similarity).
//! 2. Split the lowercased question on whitespace.
//! 3. Collect documents matched by each word, exactly or by substring.
//! 4. Add the keyword boost once to each matched document.
//! 5. Sort descending (stable for ties), keep `top_k`, drop scores at or
//!    below the minimum.

use crate::config::RetrievalConfig;
use crate::keyword_index::KeywordIndex;
use crate::types::RelevanceResult;
use crate::vector_index::VectorIndex;
use std::collections::BTreeSet;

/// Lowercase whitespace-separated words of a query, punctuation included.
pub fn query_words(query: &str) -> BTreeSet<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Documents touched by any query word through the keyword index.
pub fn keyword_matches(
    words: &BTreeSet<String>,
    keywords: &KeywordIndex,
    fuzzy_min_chars: usize,
) -> BTreeSet<usize> {
    words
        .iter()
        .flat_map(|word| keywords.matches(word, fuzzy_min_chars))
        .collect()
}

/// Rank documents for `query`, best first.
pub fn rank(
    query: &str,
    vectors: &dyn VectorIndex,
    keywords: &KeywordIndex,
    config: &RetrievalConfig,
    top_k: usize,
) -> Vec<RelevanceResult> {
    let similarities = vectors.score(query);
    let words = query_words(query);

    let matched = if words.is_empty() {
        BTreeSet::new()
    } else {
        keyword_matches(&words, keywords, config.fuzzy_min_chars)
    };

    let mut results: Vec<RelevanceResult> = similarities
        .iter()
        .enumerate()
        .map(|(document_id, &similarity)| {
            let boosted = matched.contains(&document_id);
            let score = if boosted {
                similarity + config.keyword_boost
            } else {
                similarity
            };
            RelevanceResult {
                document_id,
                similarity,
                score,
                boosted,
            }
        })
        .collect();

    // sort_by is stable, so equal scores keep document order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top_k);
    results.retain(|r| r.score > config.min_score);

    tracing::debug!(
        "Ranked {} documents for {:?}: {} keyword matches, kept {}",
        similarities.len(),
        query,
        matched.len(),
        results.len()
    );

    results
}
