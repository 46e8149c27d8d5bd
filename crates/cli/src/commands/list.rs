//! List command handler.

use clap::Args;
use monuqa_core::{config::AppConfig, AppResult};
use monuqa_knowledge::CanonicalDocument;

/// List the loaded monuments
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing list command");

        let engine = super::load_engine(config)?;

        if self.json {
            let fields: Vec<_> = engine.documents().iter().map(|d| &d.fields).collect();
            println!("{}", serde_json::to_string_pretty(&fields)?);
        } else {
            println!("{}", render_listing(engine.documents()));
        }

        Ok(())
    }
}

/// Numbered listing with type, period and year where known.
pub fn render_listing(documents: &[CanonicalDocument]) -> String {
    if documents.is_empty() {
        return "No monuments loaded.".to_string();
    }

    let mut out = format!("Available monuments ({} total):", documents.len());
    for (i, document) in documents.iter().enumerate() {
        let fields = &document.fields;
        let name = if fields.name.is_empty() {
            format!("Monument {}", i + 1)
        } else {
            fields.name.clone()
        };

        out.push_str(&format!("\n{:2}. {}", i + 1, name));
        if !fields.kind.is_empty() {
            out.push_str(&format!("\n    Type: {}", fields.kind));
        }
        if !fields.period.is_empty() {
            out.push_str(&format!("\n    Period: {}", fields.period));
        }
        if !fields.year.is_empty() {
            out.push_str(&format!("\n    Built: {}", fields.year));
        }
    }
    out
}
