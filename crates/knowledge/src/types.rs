//! Knowledge system type definitions.

use serde::{Deserialize, Serialize};

/// One ranked record for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceResult {
    /// Position of the record in the corpus
    pub document_id: usize,

    /// Cosine similarity from the vector index
    pub similarity: f32,

    /// Similarity plus the keyword boost, if any
    pub score: f32,

    /// Whether a keyword match contributed a boost
    pub boosted: bool,
}

impl RelevanceResult {
    /// Score rounded to three decimals for display.
    pub fn display_score(&self) -> f32 {
        (self.score * 1000.0).round() / 1000.0
    }
}

/// Options for the ask operation.
#[derive(Debug, Clone)]
pub struct AskOptions {
    /// Question text
    pub question: String,

    /// Number of records to retrieve; the configured default when unset
    pub top_k: Option<usize>,
}

impl AskOptions {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            top_k: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

/// Statistics for a built corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of records
    pub records_count: usize,

    /// Terms in the vector vocabulary
    pub vocabulary_size: usize,

    /// Distinct lexical keywords
    pub keywords_count: usize,
}
