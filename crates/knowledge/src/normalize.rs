//! Record normalization.
//!
//! Turns a [`MonumentRecord`] into canonical display fields, a flat labeled
//! text blob for vector indexing and the keyword list for the lexical index.
//! Normalization is total: any record, including an empty one, produces a
//! non-empty text.

use crate::record::MonumentRecord;
use serde::{Deserialize, Serialize};

/// Punctuation stripped from the edges of description words.
const KEYWORD_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Description words contributing keywords, at most.
const MAX_DESCRIPTION_KEYWORDS: usize = 10;

/// Field keys in fallback precedence order.
pub mod keys {
    pub const NAME: &[&str] = &["name"];
    pub const DESCRIPTION: &[&str] = &["description"];
    pub const PERIOD: &[&str] = &["historical_period", "period"];
    pub const STYLE: &[&str] = &["architecture_style", "style"];
    pub const YEAR: &[&str] = &["construction_year", "year"];
    pub const LOCATION: &[&str] = &["location", "address"];
    pub const KIND: &[&str] = &["type", "category"];
    pub const SIGNIFICANCE: &[&str] = &["significance", "importance"];
    pub const FIGURES: &[&str] = &["notable_figures"];
    pub const EVENTS: &[&str] = &["historical_events"];
}

/// Display-ready fields of one record. Absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonumentFields {
    pub name: String,
    pub description: String,
    pub period: String,
    pub style: String,
    pub year: String,
    pub location: String,
    pub kind: String,
    pub significance: String,
    pub notable_figures: Vec<String>,
    pub historical_events: Vec<String>,
}

impl MonumentFields {
    pub fn from_record(record: &MonumentRecord) -> Self {
        Self {
            name: record.text_of(keys::NAME),
            description: record.text_of(keys::DESCRIPTION),
            period: record.text_of(keys::PERIOD),
            style: record.text_of(keys::STYLE),
            year: record.text_of(keys::YEAR),
            location: record.text_of(keys::LOCATION),
            kind: record.text_of(keys::KIND),
            significance: record.text_of(keys::SIGNIFICANCE),
            notable_figures: record.list_of(keys::FIGURES),
            historical_events: record.list_of(keys::EVENTS),
        }
    }

    /// Labeled multi-line text, one `Label: value` line per field.
    pub fn canonical_text(&self) -> String {
        let events = self.historical_events.join(" ");
        let figures = self.notable_figures.join(" ");

        [
            ("Name", self.name.as_str()),
            ("Description", self.description.as_str()),
            ("Historical Period", self.period.as_str()),
            ("Architecture Style", self.style.as_str()),
            ("Construction Year", self.year.as_str()),
            ("Location", self.location.as_str()),
            ("Type", self.kind.as_str()),
            ("Significance", self.significance.as_str()),
            ("Historical Events", events.as_str()),
            ("Notable Figures", figures.as_str()),
        ]
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value).trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Lowercase keywords in extraction order. Repeats are kept.
    pub fn keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();

        for field in [
            &self.name,
            &self.kind,
            &self.period,
            &self.style,
            &self.location,
        ] {
            if !field.trim().is_empty() {
                keywords.push(field.to_lowercase());
            }
        }

        keywords.extend(
            self.name
                .split_whitespace()
                .filter(|word| word.chars().count() > 2)
                .map(str::to_lowercase),
        );

        keywords.extend(
            self.description
                .split_whitespace()
                .filter(|word| word.chars().count() > 3)
                .map(|word| word.to_lowercase().trim_matches(KEYWORD_PUNCTUATION).to_string())
                .take(MAX_DESCRIPTION_KEYWORDS),
        );

        let figures = self.notable_figures.join(" ");
        keywords.extend(
            figures
                .split_whitespace()
                .filter(|word| word.chars().count() > 2)
                .map(str::to_lowercase),
        );

        keywords
            .into_iter()
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect()
    }

    /// Name for display, falling back to a generic placeholder.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "This monument"
        } else {
            &self.name
        }
    }
}

/// Canonical form of one record, aligned with its position in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    /// Position of the source record in the corpus
    pub id: usize,

    /// Labeled flat text used for vector indexing
    pub text: String,

    /// Lowercase keywords used for lexical indexing
    pub keywords: Vec<String>,

    /// Coerced display fields used for answer rendering
    pub fields: MonumentFields,
}

/// Normalize a record into `(text, keywords)`.
pub fn normalize(record: &MonumentRecord) -> (String, Vec<String>) {
    let fields = MonumentFields::from_record(record);
    (fields.canonical_text(), fields.keywords())
}

/// Normalize every record, assigning document ids by position.
pub fn normalize_all(records: &[MonumentRecord]) -> Vec<CanonicalDocument> {
    records
        .iter()
        .enumerate()
        .map(|(id, record)| {
            let fields = MonumentFields::from_record(record);
            CanonicalDocument {
                id,
                text: fields.canonical_text(),
                keywords: fields.keywords(),
                fields,
            }
        })
        .collect()
}
