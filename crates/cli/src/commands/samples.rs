//! Samples command handler.
//!
//! Prints the catalogue of example questions.

use clap::Args;
use monuqa_core::AppResult;

/// Example questions grouped by what they ask about.
pub const SAMPLE_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "Basic information",
        &[
            "What is Prague Castle?",
            "Tell me about Charles Bridge",
            "Describe the Astronomical Clock",
            "What can you tell me about Old Town Square?",
        ],
    ),
    (
        "History",
        &[
            "When was Prague Castle built?",
            "When was Charles Bridge constructed?",
            "What year was the Astronomical Clock installed?",
        ],
    ),
    (
        "Architecture",
        &[
            "What architectural style is Prague Castle?",
            "Which monuments are Gothic in style?",
            "Tell me about Renaissance architecture in Prague",
        ],
    ),
    (
        "Location",
        &[
            "Where is Prague Castle located?",
            "Where can I find the Astronomical Clock?",
        ],
    ),
    (
        "Historical figures",
        &[
            "Who built Prague Castle?",
            "Who designed Charles Bridge?",
            "Which emperor founded St. Vitus Cathedral?",
        ],
    ),
    (
        "Significance",
        &[
            "Why is Prague Castle important?",
            "What makes Charles Bridge special?",
        ],
    ),
];

/// Show example questions
#[derive(Args, Debug)]
pub struct SamplesCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SamplesCommand {
    pub fn execute(&self) -> AppResult<()> {
        tracing::debug!("Executing samples command");

        if self.json {
            let catalogue: Vec<_> = SAMPLE_QUESTIONS
                .iter()
                .map(|(category, questions)| {
                    serde_json::json!({ "category": category, "questions": questions })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&catalogue)?);
        } else {
            println!("{}", render_samples());
        }

        Ok(())
    }
}

/// Human-readable sample catalogue.
pub fn render_samples() -> String {
    let mut out = String::from("Example questions:");
    for (category, questions) in SAMPLE_QUESTIONS {
        out.push_str(&format!("\n\n{}:", category));
        for question in *questions {
            out.push_str(&format!("\n   • {}", question));
        }
    }
    out
}
