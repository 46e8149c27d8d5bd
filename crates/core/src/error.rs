//! Error types for the Monuqa CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application, including configuration, I/O, knowledge, session
//! and serialization errors.

use thiserror::Error;

/// Unified error type for the Monuqa CLI.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// Errors are terminal to the operation in progress only; built indices are
/// never touched by a failing query.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record loading, indexing and retrieval errors
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// The vector space cannot be built without at least one document
    #[error("Cannot build an index from an empty corpus")]
    EmptyCorpus,

    /// Interactive session and export errors
    #[error("Session error: {0}")]
    Session(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_message() {
        let err = AppError::EmptyCorpus;
        assert!(err.to_string().contains("empty corpus"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io_err.into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_every_message_names_its_category() {
        let errors = [
            AppError::Config("bad".to_string()),
            AppError::Knowledge("bad".to_string()),
            AppError::Session("bad".to_string()),
            AppError::Serialization("bad".to_string()),
        ];

        for err in &errors {
            // no bare catch-all variant: the message never equals its payload
            assert_ne!(err.to_string(), "bad");
            let category = match err {
                AppError::Config(_) => "Configuration",
                AppError::Io(_) => "I/O",
                AppError::Knowledge(_) => "Knowledge",
                AppError::EmptyCorpus => "Cannot build",
                AppError::Session(_) => "Session",
                AppError::Serialization(_) => "Serialization",
            };
            assert!(err.to_string().starts_with(category));
        }
    }
}
