//! Monument question answering.
//!
//! Builds a hybrid retrieval index (TF-IDF vectors plus a keyword table)
//! over heterogeneous monument records and answers free-text questions
//! with templated text.

pub mod config;
pub mod corpus;
pub mod keyword_index;
pub mod normalize;
pub mod rag;
pub mod record;
pub mod text;
pub mod types;
pub mod vector_index;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use config::RetrievalConfig;
pub use keyword_index::KeywordIndex;
pub use normalize::{CanonicalDocument, MonumentFields};
pub use rag::{Intent, QnaResponse, RankedRecord};
pub use record::{FieldValue, MonumentRecord};
pub use types::{AskOptions, CorpusStats, RelevanceResult};
pub use vector_index::{TfIdfIndex, VectorIndex};

use monuqa_core::AppResult;

/// Question answering engine over a fixed corpus.
///
/// Built once; every query method takes `&self`, so a single engine can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct QnaEngine {
    records: Vec<MonumentRecord>,
    documents: Vec<CanonicalDocument>,
    keywords: KeywordIndex,
    vectors: TfIdfIndex,
    config: RetrievalConfig,
}

impl QnaEngine {
    /// Normalize `records` and build both indexes.
    ///
    /// Fails with `EmptyCorpus` when `records` is empty and with a config
    /// error when `config` is invalid.
    pub fn build(records: Vec<MonumentRecord>, config: &RetrievalConfig) -> AppResult<Self> {
        tracing::info!("Building index over {} records", records.len());

        let documents = normalize::normalize_all(&records);
        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        let vectors = TfIdfIndex::build(&texts, config)?;
        let keywords = KeywordIndex::build(&documents);

        tracing::info!(
            "Index ready: {} documents, {} terms, {} keywords",
            documents.len(),
            vectors.vocabulary_size(),
            keywords.len()
        );

        Ok(Self {
            records,
            documents,
            keywords,
            vectors,
            config: config.clone(),
        })
    }

    /// Rank records for `query`, best first, using the configured `top_k`.
    pub fn rank(&self, query: &str) -> Vec<RelevanceResult> {
        self.rank_top(query, self.config.top_k)
    }

    /// Rank records for `query`, keeping at most `top_k`.
    pub fn rank_top(&self, query: &str, top_k: usize) -> Vec<RelevanceResult> {
        rag::rank(query, &self.vectors, &self.keywords, &self.config, top_k)
    }

    /// Answer a question with the configured `top_k`.
    pub fn answer(&self, question: &str) -> QnaResponse {
        self.ask(AskOptions::new(question))
    }

    /// Rank records and render an answer for them.
    pub fn ask(&self, options: AskOptions) -> QnaResponse {
        let top_k = options.top_k.unwrap_or(self.config.top_k);
        let relevance = self.rank_top(&options.question, top_k);

        let fields: Vec<&MonumentFields> = relevance
            .iter()
            .map(|r| &self.documents[r.document_id].fields)
            .collect();
        let (intent, answer) = rag::synthesize(&options.question, &fields);

        let results = relevance
            .iter()
            .map(|r| RankedRecord {
                document_id: r.document_id,
                name: self.documents[r.document_id].fields.name.clone(),
                score: r.display_score(),
            })
            .collect();

        if relevance.is_empty() {
            tracing::info!("No records matched {:?}", options.question);
        } else {
            tracing::info!(
                "Answered {:?} as {} from {} records (top score: {:.3})",
                options.question,
                intent,
                relevance.len(),
                relevance[0].score
            );
        }

        QnaResponse {
            question: options.question,
            intent,
            answer,
            results,
            relevance,
        }
    }

    /// Records in corpus order.
    pub fn records(&self) -> &[MonumentRecord] {
        &self.records
    }

    /// Canonical documents, aligned with [`records`](Self::records).
    pub fn documents(&self) -> &[CanonicalDocument] {
        &self.documents
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            records_count: self.records.len(),
            vocabulary_size: self.vectors.vocabulary_size(),
            keywords_count: self.keywords.len(),
        }
    }
}
