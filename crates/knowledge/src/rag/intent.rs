//! Question intent detection from surface cues.
//!
//! Categories are tried in a fixed priority order and the first one whose
//! cue appears in the question wins. A cue matches any word it is a prefix
//! of, so "kings" and "years" count while "making" does not.
//!
//! The one exception to the order: a "who" question whose only temporal cue
//! is a construction verb ("Who built ...?") asks about people.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified category of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Temporal,
    Locational,
    Attributional,
    Stylistic,
    Descriptive,
    Fallback,
    NoResults,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Temporal => "temporal",
            Intent::Locational => "locational",
            Intent::Attributional => "attributional",
            Intent::Stylistic => "stylistic",
            Intent::Descriptive => "descriptive",
            Intent::Fallback => "fallback",
            Intent::NoResults => "no_results",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cue words per category, in priority order.
const CUE_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Temporal,
        &["when", "year", "built", "constructed", "date"],
    ),
    (
        Intent::Locational,
        &["where", "location", "address", "find", "located"],
    ),
    (
        Intent::Attributional,
        &[
            "who",
            "architect",
            "designer",
            "builder",
            "founded",
            "emperor",
            "king",
        ],
    ),
    (
        Intent::Stylistic,
        &[
            "style",
            "architecture",
            "architectural",
            "gothic",
            "baroque",
            "renaissance",
        ],
    ),
    (
        Intent::Descriptive,
        &["what", "describe", "about", "tell me", "explain"],
    ),
];

/// Temporal cues that name the act of building rather than a time.
const CONSTRUCTION_VERBS: &[&str] = &["built", "constructed"];

/// Lowercase alphanumeric words of a question.
fn words(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `cue` (one or more words) occurs as a contiguous run of word
/// prefixes.
fn has_cue(words: &[String], cue: &str) -> bool {
    let cue_words: Vec<&str> = cue.split_whitespace().collect();
    if cue_words.is_empty() || cue_words.len() > words.len() {
        return false;
    }

    words.windows(cue_words.len()).any(|window| {
        window
            .iter()
            .zip(&cue_words)
            .all(|(w, c)| w.starts_with(c))
    })
}

fn matches(words: &[String], cues: &[&str]) -> bool {
    cues.iter().any(|cue| has_cue(words, cue))
}

/// Classify a question for which at least one record was found.
pub fn classify(question: &str) -> Intent {
    let words = words(question);

    let intent = CUE_RULES
        .iter()
        .find(|(_, cues)| matches(&words, cues))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback);

    if intent == Intent::Temporal && has_cue(&words, "who") && !has_time_cue(&words) {
        return Intent::Attributional;
    }
    intent
}

/// Temporal cues other than the construction verbs.
fn has_time_cue(words: &[String]) -> bool {
    CUE_RULES
        .iter()
        .filter(|(intent, _)| *intent == Intent::Temporal)
        .flat_map(|(_, cues)| cues.iter())
        .filter(|cue| !CONSTRUCTION_VERBS.contains(*cue))
        .any(|cue| has_cue(words, cue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_categories() {
        assert_eq!(classify("When was Charles Bridge built?"), Intent::Temporal);
        assert_eq!(classify("Where is the Astronomical Clock?"), Intent::Locational);
        assert_eq!(classify("Which architect designed it?"), Intent::Attributional);
        assert_eq!(classify("Is it Baroque?"), Intent::Stylistic);
        assert_eq!(classify("Describe Old Town Square"), Intent::Descriptive);
        assert_eq!(classify("Prague Castle"), Intent::Fallback);
    }

    #[test]
    fn test_temporal_wins_over_stylistic() {
        assert_eq!(classify("When was the gothic cathedral finished?"), Intent::Temporal);
        assert_eq!(classify("What year is the gothic bridge from?"), Intent::Temporal);
    }

    #[test]
    fn test_who_built_is_attributional() {
        assert_eq!(classify("Who built St. Vitus Cathedral?"), Intent::Attributional);
    }

    #[test]
    fn test_built_without_interrogative_is_temporal() {
        assert_eq!(classify("What style is Charles Bridge built in?"), Intent::Temporal);
    }

    #[test]
    fn test_multi_word_cue() {
        assert_eq!(classify("Tell me the story of the clock"), Intent::Descriptive);
        // "me" and "tell" apart are not the cue
        assert_eq!(classify("Me, I tell stories"), Intent::Fallback);
    }

    #[test]
    fn test_cues_match_word_prefixes_only() {
        // "making" must not trigger "king", "update" must not trigger "date"
        assert_eq!(classify("Making an update"), Intent::Fallback);
    }

    #[test]
    fn test_plural_cues() {
        assert_eq!(
            classify("Which kings were crowned in St. Vitus Cathedral?"),
            Intent::Attributional
        );
        assert_eq!(
            classify("Which architects designed Charles Bridge?"),
            Intent::Attributional
        );
        assert_eq!(
            classify("In what years was the Astronomical Clock renovated?"),
            Intent::Temporal
        );
    }

    #[test]
    fn test_where_built_is_temporal() {
        assert_eq!(classify("Where was Charles Bridge built?"), Intent::Temporal);
    }

    #[test]
    fn test_who_with_year_is_temporal() {
        assert_eq!(
            classify("Who founded Prague Castle and in what year?"),
            Intent::Temporal
        );
        assert_eq!(classify("Who constructed it, and when?"), Intent::Temporal);
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(Intent::NoResults.to_string(), "no_results");
        assert_eq!(
            serde_json::to_string(&Intent::Attributional).unwrap(),
            "\"attributional\""
        );
    }
}
