//! Interactive session log and JSON export.

use chrono::{DateTime, Local};
use monuqa_core::{AppError, AppResult};
use monuqa_knowledge::QnaResponse;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One asked question.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub question: String,
    pub monument_count: usize,
}

/// Questions asked during one interactive session.
#[derive(Debug, Clone)]
pub struct SessionLog {
    start_time: DateTime<Local>,
    history: Vec<HistoryEntry>,
    monuments_referenced: BTreeSet<String>,
}

#[derive(Serialize)]
struct SessionInfo<'a> {
    start_time: DateTime<Local>,
    export_time: DateTime<Local>,
    questions_asked: usize,
    monuments_referenced: &'a BTreeSet<String>,
}

#[derive(Serialize)]
struct SessionExport<'a> {
    session_info: SessionInfo<'a>,
    question_history: &'a [HistoryEntry],
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLog {
    pub fn new() -> Self {
        Self {
            start_time: Local::now(),
            history: Vec::new(),
            monuments_referenced: BTreeSet::new(),
        }
    }

    /// Record an answered question and the named records it drew on.
    pub fn record(&mut self, response: &QnaResponse) {
        for result in &response.results {
            if !result.name.is_empty() {
                self.monuments_referenced.insert(result.name.clone());
            }
        }

        self.history.push(HistoryEntry {
            timestamp: Local::now(),
            question: response.question.clone(),
            monument_count: response.monument_count(),
        });
    }

    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn questions_asked(&self) -> usize {
        self.history.len()
    }

    pub fn monuments_referenced(&self) -> &BTreeSet<String> {
        &self.monuments_referenced
    }

    /// Write the session as pretty JSON into `dir`, returning the file path.
    pub fn export(&self, dir: &Path) -> AppResult<PathBuf> {
        let now = Local::now();
        let path = dir.join(format!(
            "monuqa_session_{}.json",
            now.format("%Y%m%d_%H%M%S")
        ));

        let export = SessionExport {
            session_info: SessionInfo {
                start_time: self.start_time,
                export_time: now,
                questions_asked: self.questions_asked(),
                monuments_referenced: &self.monuments_referenced,
            },
            question_history: &self.history,
        };

        let json = serde_json::to_string_pretty(&export)?;
        std::fs::write(&path, json)
            .map_err(|e| AppError::Session(format!("Failed to write {:?}: {}", path, e)))?;

        tracing::info!(
            "Exported {} questions to {:?}",
            self.questions_asked(),
            path
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monuqa_knowledge::{Intent, RankedRecord};
    use tempfile::TempDir;

    fn response(question: &str, names: &[&str]) -> QnaResponse {
        QnaResponse {
            question: question.to_string(),
            intent: Intent::Fallback,
            answer: String::new(),
            results: names
                .iter()
                .enumerate()
                .map(|(document_id, name)| RankedRecord {
                    document_id,
                    name: name.to_string(),
                    score: 0.5,
                })
                .collect(),
            relevance: Vec::new(),
        }
    }

    #[test]
    fn test_record_tracks_history_and_names() {
        let mut log = SessionLog::new();
        log.record(&response("Charles Bridge", &["Charles Bridge", "Prague Castle"]));
        log.record(&response("xyzzy", &[]));
        log.record(&response("bridge", &["Charles Bridge", ""]));

        assert_eq!(log.questions_asked(), 3);
        assert_eq!(log.history()[1].monument_count, 0);
        assert_eq!(log.history()[2].monument_count, 2);
        assert_eq!(log.monuments_referenced().len(), 2);
    }

    #[test]
    fn test_export_writes_session_file() {
        let temp = TempDir::new().unwrap();
        let mut log = SessionLog::new();
        log.record(&response("When was Charles Bridge built?", &["Charles Bridge"]));

        let path = log.export(temp.path()).unwrap();
        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("monuqa_session_"));
        assert!(file_name.ends_with(".json"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["session_info"]["questions_asked"], 1);
        assert_eq!(
            json["session_info"]["monuments_referenced"][0],
            "Charles Bridge"
        );
        assert!(json["session_info"]["start_time"].is_string());
        assert!(json["session_info"]["export_time"].is_string());

        let entry = &json["question_history"][0];
        assert_eq!(entry["question"], "When was Charles Bridge built?");
        assert_eq!(entry["monument_count"], 1);
        assert!(entry["timestamp"].is_string());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let log = SessionLog::new();
        let result = log.export(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(AppError::Session(_))));
    }
}
