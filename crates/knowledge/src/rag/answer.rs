//! Templated answer synthesis.
//!
//! Renders ranked records into a natural-language answer. The template is
//! picked by the question's [`Intent`]; fields a record lacks are left out of
//! its clause rather than replaced with placeholders.

use crate::normalize::MonumentFields;
use crate::rag::intent::{classify, Intent};

/// Answer used when no record matched the question.
pub const NO_INFORMATION_MESSAGE: &str =
    "I don't have information about that topic in the monuments database.";

/// Questions offered alongside the no-information message.
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What is Prague Castle?",
    "When was Charles Bridge built?",
    "Tell me about the Astronomical Clock",
    "Where is Old Town Square?",
    "Who built St. Vitus Cathedral?",
];

/// Maximum historical events listed in a descriptive answer.
const MAX_EVENTS: usize = 3;

/// The full no-information answer with suggestions.
pub fn no_information_answer() -> String {
    format!(
        "{}\n\nTry asking: {}",
        NO_INFORMATION_MESSAGE,
        SUGGESTED_QUESTIONS.join(" • ")
    )
}

/// Classify the question and render an answer from `ranked` (best first).
pub fn synthesize(question: &str, ranked: &[&MonumentFields]) -> (Intent, String) {
    let Some(top) = ranked.first() else {
        return (Intent::NoResults, no_information_answer());
    };

    let intent = classify(question);
    let answer = match intent {
        Intent::Temporal => temporal(ranked, top),
        Intent::Locational => locational(ranked, top),
        Intent::Attributional => attributional(ranked, top),
        Intent::Stylistic => stylistic(ranked, top),
        Intent::Descriptive => descriptive(top),
        Intent::Fallback | Intent::NoResults => fallback(top),
    };

    (intent, answer)
}

/// Join clauses into sentences and append the top record's description.
fn with_context(clauses: &[String], label: &str, top: &MonumentFields) -> String {
    let mut answer = format!("{}.", clauses.join(". "));
    if !top.description.is_empty() {
        answer.push_str(&format!("\n\n{}: {}", label, top.description));
    }
    answer
}

/// A year with a hyphen is a construction range.
fn is_range(year: &str) -> bool {
    year.contains('-')
}

/// Only the construction-date answer treats an "Unknown" year as missing.
fn has_known_year(fields: &MonumentFields) -> bool {
    !fields.year.is_empty() && fields.year != "Unknown"
}

fn temporal(ranked: &[&MonumentFields], top: &MonumentFields) -> String {
    let clauses: Vec<String> = ranked
        .iter()
        .filter_map(|m| {
            if has_known_year(m) {
                let preposition = if is_range(&m.year) { "between" } else { "in" };
                Some(format!(
                    "{} was built {} {}",
                    m.display_name(),
                    preposition,
                    m.year
                ))
            } else if !m.period.is_empty() {
                Some(format!(
                    "{} was built during the {}",
                    m.display_name(),
                    m.period
                ))
            } else {
                None
            }
        })
        .collect();

    if clauses.is_empty() {
        return "Construction date information is not available.".to_string();
    }
    with_context(&clauses, "Additional context", top)
}

fn locational(ranked: &[&MonumentFields], top: &MonumentFields) -> String {
    let clauses: Vec<String> = ranked
        .iter()
        .filter(|m| !m.location.is_empty())
        .map(|m| format!("{} is located at {}", m.display_name(), m.location))
        .collect();

    if clauses.is_empty() {
        return "Location information is not available in the database.".to_string();
    }
    with_context(&clauses, "Description", top)
}

fn attributional(ranked: &[&MonumentFields], top: &MonumentFields) -> String {
    let clauses: Vec<String> = ranked
        .iter()
        .filter(|m| !m.notable_figures.is_empty())
        .map(|m| {
            format!(
                "{} is associated with {}",
                m.display_name(),
                m.notable_figures.join(", ")
            )
        })
        .collect();

    if clauses.is_empty() {
        return format!(
            "Information about the people associated with {} is not available in the database.",
            top.display_name()
        );
    }
    with_context(&clauses, "More details", top)
}

fn stylistic(ranked: &[&MonumentFields], top: &MonumentFields) -> String {
    let clauses: Vec<String> = ranked
        .iter()
        .filter(|m| !m.style.is_empty())
        .map(|m| format!("{} is built in {} style", m.display_name(), m.style))
        .collect();

    if clauses.is_empty() {
        return format!(
            "Architectural style information for {} is not available.",
            top.display_name()
        );
    }
    with_context(&clauses, "Description", top)
}

/// Structured overview of the best record only.
fn descriptive(top: &MonumentFields) -> String {
    let mut sections = vec![format!("**{}**", top.display_name())];

    if !top.description.is_empty() {
        sections.push(format!("**Description:** {}", top.description));
    }

    if !top.year.is_empty() {
        if is_range(&top.year) {
            sections.push(format!("**Construction Period:** {}", top.year));
        } else {
            sections.push(format!("**Built:** {}", top.year));
        }
    } else if !top.period.is_empty() {
        sections.push(format!("**Historical Period:** {}", top.period));
    }

    if !top.style.is_empty() {
        sections.push(format!("**Architectural Style:** {}", top.style));
    }

    if !top.location.is_empty() {
        sections.push(format!("**Location:** {}", top.location));
    }

    if !top.significance.is_empty() {
        sections.push(format!("**Significance:** {}", top.significance));
    }

    if !top.notable_figures.is_empty() {
        sections.push(format!(
            "**Notable Figures:** {}",
            top.notable_figures.join(", ")
        ));
    }

    if !top.historical_events.is_empty() {
        let events: Vec<&str> = top
            .historical_events
            .iter()
            .take(MAX_EVENTS)
            .map(String::as_str)
            .collect();
        sections.push(format!("**Historical Events:** {}", events.join("; ")));
    }

    sections.join("\n")
}

fn fallback(top: &MonumentFields) -> String {
    let mut answer = format!("**{}**", top.display_name());

    if !top.description.is_empty() {
        answer.push_str(&format!("\n\n{}", top.description));
    }

    let dating = match (!top.year.is_empty(), !top.period.is_empty()) {
        (true, true) => Some(format!("Built in {} during the {}.", top.year, top.period)),
        (true, false) => Some(format!("Built in {}.", top.year)),
        (false, true) => Some(format!("From the {}.", top.period)),
        (false, false) => None,
    };

    let style = (!top.style.is_empty()).then(|| format!("Features {} architecture.", top.style));

    match (dating, style) {
        (Some(dating), Some(style)) => answer.push_str(&format!("\n\n{} {}", dating, style)),
        (Some(dating), None) => answer.push_str(&format!("\n\n{}", dating)),
        (None, Some(style)) => answer.push_str(&format!("\n\n{}", style)),
        (None, None) => {}
    }

    answer
}
