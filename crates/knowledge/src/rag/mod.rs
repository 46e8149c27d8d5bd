//! Question answering over the monument corpus.
//!
//! Ranks records with the hybrid ranker and renders templated answers.

pub mod answer;
pub mod intent;
pub mod search;
pub mod types;

pub use answer::{no_information_answer, synthesize, NO_INFORMATION_MESSAGE, SUGGESTED_QUESTIONS};
pub use intent::{classify, Intent};
pub use search::rank;
pub use types::{QnaResponse, RankedRecord};
