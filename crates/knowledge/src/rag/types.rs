//! Question answering response types.

use crate::rag::intent::Intent;
use crate::types::RelevanceResult;
use serde::{Deserialize, Serialize};

/// A ranked record as shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    /// Position of the record in the corpus
    pub document_id: usize,

    /// Record name (may be empty)
    pub name: String,

    /// Boosted relevance score, rounded to three decimals
    pub score: f32,
}

/// Response from answering a question.
///
/// Contains the templated answer along with the ranked records it was
/// built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QnaResponse {
    /// Original question text
    pub question: String,

    /// Detected question category
    pub intent: Intent,

    /// Rendered answer text
    pub answer: String,

    /// Records the answer was built from, best first
    pub results: Vec<RankedRecord>,

    /// Internal: raw ranking output, kept for logging
    #[serde(skip)]
    pub relevance: Vec<RelevanceResult>,
}

impl QnaResponse {
    /// Number of records the answer drew on.
    pub fn monument_count(&self) -> usize {
        self.results.len()
    }

    /// Highest boosted score, or zero when nothing matched.
    pub fn max_score(&self) -> f32 {
        self.relevance.first().map(|r| r.score).unwrap_or(0.0)
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(results: Vec<RankedRecord>) -> QnaResponse {
        QnaResponse {
            question: "When was Charles Bridge built?".to_string(),
            intent: Intent::Temporal,
            answer: "Charles Bridge was built between 1357-1402.".to_string(),
            results,
            relevance: Vec::new(),
        }
    }

    #[test]
    fn test_empty_response() {
        let response = response(Vec::new());
        assert!(!response.has_results());
        assert_eq!(response.monument_count(), 0);
        assert_eq!(response.max_score(), 0.0);
    }

    #[test]
    fn test_serialization_skips_relevance() {
        let response = response(vec![RankedRecord {
            document_id: 1,
            name: "Charles Bridge".to_string(),
            score: 0.612,
        }]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["intent"], "temporal");
        assert_eq!(json["results"][0]["name"], "Charles Bridge");
        assert!(json.get("relevance").is_none());
    }
}
