//! Retrieval configuration management.

use monuqa_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tuning parameters for index build and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of records returned per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Score added once to every record matched by a keyword
    #[serde(default = "default_keyword_boost")]
    pub keyword_boost: f32,

    /// Results must score strictly above this value
    #[serde(default = "default_min_score")]
    pub min_score: f32,

    /// Vocabulary size cap for the vector index
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Terms found in more than this fraction of documents are dropped
    #[serde(default = "default_max_df")]
    pub max_df: f32,

    /// Shortest word n-gram in the vocabulary
    #[serde(default = "default_min_ngram")]
    pub min_ngram: usize,

    /// Longest word n-gram in the vocabulary
    #[serde(default = "default_max_ngram")]
    pub max_ngram: usize,

    /// Both sides of a substring keyword match must be longer than this
    #[serde(default = "default_fuzzy_min_chars")]
    pub fuzzy_min_chars: usize,
}

fn default_top_k() -> usize {
    3
}

fn default_keyword_boost() -> f32 {
    0.2
}

fn default_min_score() -> f32 {
    0.01
}

fn default_max_features() -> usize {
    2000
}

fn default_max_df() -> f32 {
    0.95
}

fn default_min_ngram() -> usize {
    1
}

fn default_max_ngram() -> usize {
    3
}

fn default_fuzzy_min_chars() -> usize {
    crate::keyword_index::FUZZY_MIN_CHARS
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            keyword_boost: default_keyword_boost(),
            min_score: default_min_score(),
            max_features: default_max_features(),
            max_df: default_max_df(),
            min_ngram: default_min_ngram(),
            max_ngram: default_max_ngram(),
            fuzzy_min_chars: default_fuzzy_min_chars(),
        }
    }
}

impl RetrievalConfig {
    /// Reject settings that would make the index or ranking meaningless.
    pub fn validate(&self) -> AppResult<()> {
        if self.top_k == 0 {
            return Err(AppError::Config("top_k must be at least 1".to_string()));
        }

        if self.min_ngram == 0 || self.min_ngram > self.max_ngram {
            return Err(AppError::Config(format!(
                "Invalid n-gram range {}..={}",
                self.min_ngram, self.max_ngram
            )));
        }

        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(AppError::Config(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }

        if self.max_features == 0 {
            return Err(AppError::Config(
                "max_features must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load retrieval configuration.
///
/// Loads from `.monuqa/retrieval.yaml` if it exists, otherwise returns
/// the defaults.
pub fn load_config(workspace: &Path) -> AppResult<RetrievalConfig> {
    let config_path = get_config_path(workspace);

    if !config_path.exists() {
        tracing::debug!("Using default retrieval config (no config file found)");
        return Ok(RetrievalConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        AppError::Knowledge(format!("Failed to read config at {:?}: {}", config_path, e))
    })?;

    let config: RetrievalConfig = serde_yaml::from_str(&content).map_err(|e| {
        AppError::Knowledge(format!("Failed to parse config at {:?}: {}", config_path, e))
    })?;

    config.validate()?;

    tracing::debug!("Loaded retrieval config from {:?}", config_path);
    Ok(config)
}

/// Save retrieval configuration.
pub fn save_config(workspace: &Path, config: &RetrievalConfig) -> AppResult<()> {
    let config_path = get_config_path(workspace);

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Knowledge(format!("Failed to create config directory: {}", e))
        })?;
    }

    let yaml = serde_yaml::to_string(config)
        .map_err(|e| AppError::Knowledge(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, yaml).map_err(|e| {
        AppError::Knowledge(format!("Failed to write config to {:?}: {}", config_path, e))
    })?;

    tracing::debug!("Saved retrieval config to {:?}", config_path);
    Ok(())
}

/// Get the path to the retrieval config file.
pub fn get_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".monuqa").join("retrieval.yaml")
}
