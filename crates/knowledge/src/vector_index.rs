//! Vector index abstraction and the TF-IDF implementation.
//!
//! Documents are projected into a term-weighted vector space learned from
//! the corpus (word uni/bi/tri-grams, stop words removed, vocabulary capped)
//! and compared to queries by cosine similarity.

use crate::config::RetrievalConfig;
use crate::text;
use monuqa_core::{AppError, AppResult};
use std::collections::{BTreeMap, HashMap};

/// Trait for similarity backends.
///
/// Implementations are built once from the full corpus and are read-only
/// afterwards.
pub trait VectorIndex: Send + Sync {
    /// Similarity of `query` to every document, in document order, in `[0, 1]`.
    fn score(&self, query: &str) -> Vec<f32>;

    /// Number of indexed documents.
    fn len(&self) -> usize;

    /// Number of terms in the learned vocabulary.
    fn vocabulary_size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sparse vector: `(term index, weight)` pairs sorted by term index.
type SparseVector = Vec<(usize, f32)>;

/// TF-IDF weighted vector space over a fixed corpus.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f32>,
    doc_vectors: Vec<SparseVector>,
    min_ngram: usize,
    max_ngram: usize,
}

impl TfIdfIndex {
    /// Learn the vocabulary and weights from `texts`.
    ///
    /// Fails with [`AppError::EmptyCorpus`] when `texts` is empty.
    pub fn build<S: AsRef<str>>(texts: &[S], config: &RetrievalConfig) -> AppResult<Self> {
        if texts.is_empty() {
            return Err(AppError::EmptyCorpus);
        }
        config.validate()?;

        let n_docs = texts.len();
        let term_counts: Vec<HashMap<String, usize>> = texts
            .iter()
            .map(|t| count_terms(t.as_ref(), config.min_ngram, config.max_ngram))
            .collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        let mut corpus_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in &term_counts {
            for (term, count) in counts {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *corpus_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }

        // A lone document would lose every term to the ratio cut
        let max_doc_count = if n_docs > 1 {
            config.max_df * n_docs as f32
        } else {
            n_docs as f32
        };

        let mut candidates: Vec<(&str, usize)> = corpus_freq
            .iter()
            .filter(|(term, _)| doc_freq[*term] as f32 <= max_doc_count)
            .map(|(term, count)| (*term, *count))
            .collect();

        // Most frequent first, alphabetical among equals
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        candidates.truncate(config.max_features);

        let mut selected: Vec<&str> = candidates.into_iter().map(|(term, _)| term).collect();
        selected.sort_unstable();

        let vocabulary: BTreeMap<String, usize> = selected
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let idf: Vec<f32> = selected
            .iter()
            .map(|term| {
                let df = doc_freq[term] as f32;
                ((1.0 + n_docs as f32) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            doc_vectors: Vec::with_capacity(n_docs),
            min_ngram: config.min_ngram,
            max_ngram: config.max_ngram,
        };

        let doc_vectors: Vec<SparseVector> = term_counts
            .iter()
            .map(|counts| index.weigh(counts))
            .collect();
        index.doc_vectors = doc_vectors;

        tracing::info!(
            "Built TF-IDF index: {} documents, {} terms",
            n_docs,
            index.vocabulary.len()
        );

        Ok(index)
    }

    /// Project raw text into the learned space (unit length, or all zero).
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&count_terms(text, self.min_ngram, self.max_ngram))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    fn weigh(&self, counts: &HashMap<String, usize>) -> SparseVector {
        let mut vector: SparseVector = counts
            .iter()
            .filter_map(|(term, count)| {
                self.vocabulary
                    .get(term)
                    .map(|&idx| (idx, *count as f32 * self.idf[idx]))
            })
            .collect();
        vector.sort_unstable_by_key(|(idx, _)| *idx);

        let norm = magnitude(&vector);
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }
}

impl VectorIndex for TfIdfIndex {
    fn score(&self, query: &str) -> Vec<f32> {
        let query_vector = self.transform(query);
        self.doc_vectors
            .iter()
            .map(|doc| cosine_similarity(&query_vector, doc))
            .collect()
    }

    fn len(&self) -> usize {
        self.doc_vectors.len()
    }

    fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

fn count_terms(text: &str, min_n: usize, max_n: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in text::analyze(text, min_n, max_n) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

fn magnitude(v: &[(usize, f32)]) -> f32 {
    v.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
}

/// Cosine similarity of two sorted sparse vectors; 0 if either is zero.
pub fn cosine_similarity(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (mut i, mut j, mut dot) = (0, 0, 0.0f32);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "Name: Charles Bridge\nDescription: stone gothic bridge over the river",
            "Name: Astronomical Clock\nDescription: medieval clock on the town hall",
            "Name: Powder Tower\nDescription: gothic tower and city gate",
        ]
    }

    #[test]
    fn test_empty_corpus_fails() {
        let texts: Vec<&str> = Vec::new();
        let result = TfIdfIndex::build(&texts, &RetrievalConfig::default());
        assert!(matches!(result, Err(AppError::EmptyCorpus)));
    }

    #[test]
    fn test_scores_one_per_document_in_range() {
        let index = TfIdfIndex::build(&corpus(), &RetrievalConfig::default()).unwrap();
        let scores = index.score("gothic bridge");

        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert!(scores[0] > scores[2]);
        assert!(scores[2] > scores[1]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_terms_in_every_document_are_dropped() {
        let index = TfIdfIndex::build(&corpus(), &RetrievalConfig::default()).unwrap();

        // "name" is a stop word, "description" appears in all documents
        assert!(!index.contains_term("description"));
        assert!(index.contains_term("charles bridge"));
        assert!(index.contains_term("stone gothic bridge"));
    }

    #[test]
    fn test_unknown_query_scores_zero() {
        let index = TfIdfIndex::build(&corpus(), &RetrievalConfig::default()).unwrap();
        assert!(index.score("xyzzy nonsense").iter().all(|s| *s == 0.0));
        assert!(index.score("").iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = RetrievalConfig::default();
        let first = TfIdfIndex::build(&corpus(), &config).unwrap();
        let second = TfIdfIndex::build(&corpus(), &config).unwrap();

        assert_eq!(first.score("medieval clock"), second.score("medieval clock"));
        assert_eq!(first.vocabulary_size(), second.vocabulary_size());
    }

    #[test]
    fn test_max_features_caps_vocabulary() {
        let config = RetrievalConfig {
            max_features: 5,
            ..RetrievalConfig::default()
        };
        let index = TfIdfIndex::build(&corpus(), &config).unwrap();
        assert_eq!(index.vocabulary_size(), 5);
    }

    #[test]
    fn test_single_document_keeps_vocabulary() {
        let index =
            TfIdfIndex::build(&["Old Town Square"], &RetrievalConfig::default()).unwrap();
        assert!(index.vocabulary_size() > 0);
        let scores = index.score("old town square");
        assert!((scores[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        assert_eq!(cosine_similarity(&[], &[(0, 1.0)]), 0.0);
        let v = vec![(0, 0.6), (3, 0.8)];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }
}
