//! Command handlers for the Monuqa CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod chat;
pub mod list;
pub mod samples;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use list::ListCommand;
pub use samples::SamplesCommand;

use monuqa_core::{config::AppConfig, AppResult};
use monuqa_knowledge::{config::load_config, corpus, QnaEngine};

/// Load records and retrieval settings for the workspace and build the engine.
pub fn load_engine(config: &AppConfig) -> AppResult<QnaEngine> {
    let retrieval = load_config(&config.workspace)?;
    let records = corpus::load_or_reference(config.data_dir.as_deref())?;
    QnaEngine::build(records, &retrieval)
}
