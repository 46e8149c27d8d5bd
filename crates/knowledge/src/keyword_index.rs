//! Inverted keyword index.
//!
//! Maps each lowercase keyword to the ids of the documents that produced it.
//! A document id is appended once per occurrence, so a keyword extracted
//! from several fields of one record lists that record several times.

use crate::normalize::CanonicalDocument;
use std::collections::{BTreeMap, BTreeSet};

/// Minimum length (exclusive) both sides need for a substring match.
pub const FUZZY_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    entries: BTreeMap<String, Vec<usize>>,
}

impl KeywordIndex {
    /// Build the index from normalized documents.
    pub fn build(documents: &[CanonicalDocument]) -> Self {
        let mut entries: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for doc in documents {
            for keyword in &doc.keywords {
                entries.entry(keyword.clone()).or_default().push(doc.id);
            }
        }

        tracing::debug!(
            "Built keyword index: {} keywords over {} documents",
            entries.len(),
            documents.len()
        );

        Self { entries }
    }

    /// Document ids listed under an exact keyword.
    pub fn lookup(&self, word: &str) -> &[usize] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Document ids whose keywords contain `word` or are contained in it.
    ///
    /// Both strings must be longer than `min_chars` characters. This scans
    /// the whole vocabulary per call, which is fine for corpora of a few
    /// hundred records but grows with vocabulary size. It also accepts loose
    /// matches such as "cast" against "castle" and "broadcast".
    pub fn fuzzy_lookup(&self, word: &str, min_chars: usize) -> BTreeSet<usize> {
        let mut ids = BTreeSet::new();
        if word.chars().count() <= min_chars {
            return ids;
        }

        for (keyword, doc_ids) in &self.entries {
            if keyword.chars().count() > min_chars
                && (keyword.contains(word) || word.contains(keyword.as_str()))
            {
                ids.extend(doc_ids.iter().copied());
            }
        }

        ids
    }

    /// Every document id touched by `word`, exactly or by substring.
    pub fn matches(&self, word: &str, min_chars: usize) -> BTreeSet<usize> {
        let mut ids: BTreeSet<usize> = self.lookup(word).iter().copied().collect();
        ids.extend(self.fuzzy_lookup(word, min_chars));
        ids
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
