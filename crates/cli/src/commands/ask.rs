//! Ask command handler.
//!
//! Answers a single question against the monument corpus.

use clap::Args;
use monuqa_core::{config::AppConfig, AppError, AppResult};
use monuqa_knowledge::{AskOptions, QnaResponse};

/// Ask a question about the monuments
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Number of records to draw the answer from
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let question = self.question.join(" ");
        if question.trim().is_empty() {
            return Err(AppError::Config("No question provided".to_string()));
        }

        let engine = super::load_engine(config)?;

        let mut options = AskOptions::new(question);
        if let Some(top_k) = self.top_k {
            options = options.with_top_k(top_k);
        }
        let response = engine.ask(options);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", render_response(&response));
        }

        Ok(())
    }
}

/// Answer text followed by the records it was based on.
pub fn render_response(response: &QnaResponse) -> String {
    let mut out = response.answer.clone();

    if response.has_results() {
        out.push_str(&format!(
            "\n\nBased on {} relevant monument(s):",
            response.monument_count()
        ));
        for (i, result) in response.results.iter().enumerate() {
            let name = if result.name.is_empty() {
                format!("Monument {}", i + 1)
            } else {
                result.name.clone()
            };
            out.push_str(&format!(
                "\n   {}. {} (relevance: {:.3})",
                i + 1,
                name,
                result.score
            ));
        }
    }

    out
}
