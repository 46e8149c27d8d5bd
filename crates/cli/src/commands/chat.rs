//! Chat command handler.
//!
//! Interactive read-eval loop: each line is either a session command or a
//! question. The session log can be exported as JSON.

use super::ask::render_response;
use super::list::render_listing;
use super::samples::render_samples;
use crate::session::SessionLog;
use chrono::Local;
use clap::Args;
use monuqa_core::{config::AppConfig, AppResult};
use monuqa_knowledge::QnaEngine;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "Commands:
   help, h, ?          Show this help
   samples, examples   Show example questions
   history, hist       Show question history
   stats, statistics   Show session statistics
   list, monuments     List available monuments
   export              Export the session as JSON
   quit, exit, q       Exit

Anything else is answered as a question, for example:
   • What is Prague Castle?
   • When was Charles Bridge built?
   • Who built St. Vitus Cathedral?";

/// Start an interactive question session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Directory for session exports (default: .monuqa/ in the workspace)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Help,
    Samples,
    History,
    Stats,
    List,
    Export,
    Quit,
    Question(String),
}

impl ChatInput {
    /// Parse a trimmed, non-empty line. Commands are case-insensitive.
    pub fn parse(line: &str) -> Self {
        match line.to_lowercase().as_str() {
            "help" | "h" | "?" => ChatInput::Help,
            "samples" | "examples" => ChatInput::Samples,
            "history" | "hist" => ChatInput::History,
            "stats" | "statistics" => ChatInput::Stats,
            "list" | "monuments" => ChatInput::List,
            "export" => ChatInput::Export,
            "quit" | "exit" | "q" => ChatInput::Quit,
            _ => ChatInput::Question(line.to_string()),
        }
    }
}

impl ChatCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let engine = super::load_engine(config)?;
        let export_dir = match &self.export_dir {
            Some(dir) => dir.clone(),
            None => {
                config.ensure_monuqa_dir()?;
                config.monuqa_dir()
            }
        };

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut session = SessionLog::new();

        run_session(
            &engine,
            &mut session,
            stdin.lock(),
            stdout.lock(),
            &export_dir,
        )?;

        tracing::info!(
            "Session ended after {} questions",
            session.questions_asked()
        );
        Ok(())
    }
}

/// Drive the loop until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    engine: &QnaEngine,
    session: &mut SessionLog,
    input: R,
    mut output: W,
    export_dir: &Path,
) -> AppResult<()> {
    writeln!(
        output,
        "Monument Q&A ready with {} records. Type 'help' for commands.",
        engine.records().len()
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "\n> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output, "\nSession ended. Goodbye!")?;
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ChatInput::parse(line) {
            ChatInput::Quit => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            ChatInput::Help => writeln!(output, "{}", HELP)?,
            ChatInput::Samples => writeln!(output, "{}", render_samples())?,
            ChatInput::History => writeln!(output, "{}", render_history(session))?,
            ChatInput::Stats => writeln!(output, "{}", render_stats(engine, session))?,
            ChatInput::List => writeln!(output, "{}", render_listing(engine.documents()))?,
            ChatInput::Export => match session.export(export_dir) {
                Ok(path) => writeln!(output, "Session exported to {}", path.display())?,
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    writeln!(output, "Export failed: {}", e)?;
                }
            },
            ChatInput::Question(question) => {
                let response = engine.answer(&question);
                session.record(&response);
                writeln!(output, "\n{}", render_response(&response))?;
            }
        }
    }

    Ok(())
}

fn render_history(session: &SessionLog) -> String {
    if session.history().is_empty() {
        return "No questions asked yet in this session.".to_string();
    }

    let mut out = String::from("Question history:");
    for (i, entry) in session.history().iter().enumerate() {
        out.push_str(&format!(
            "\n{:2}. [{}] {}\n    Found {} relevant monument(s)",
            i + 1,
            entry.timestamp.format("%H:%M:%S"),
            entry.question,
            entry.monument_count
        ));
    }
    out
}

fn render_stats(engine: &QnaEngine, session: &SessionLog) -> String {
    let elapsed = Local::now() - session.start_time();
    let secs = elapsed.num_seconds().max(0);
    let stats = engine.stats();

    format!(
        "Session statistics:\n   Duration:             {}:{:02}:{:02}\n   Questions asked:      {}\n   Monuments loaded:     {}\n   Monuments referenced: {}\n   Vocabulary size:      {}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        session.questions_asked(),
        stats.records_count,
        session.monuments_referenced().len(),
        stats.vocabulary_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use monuqa_knowledge::{corpus::reference_monuments, RetrievalConfig};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn engine() -> QnaEngine {
        QnaEngine::build(reference_monuments(), &RetrievalConfig::default()).unwrap()
    }

    fn run(input: &str, export_dir: &Path) -> (SessionLog, String) {
        let mut session = SessionLog::new();
        let mut output = Vec::new();
        run_session(
            &engine(),
            &mut session,
            Cursor::new(input.to_string()),
            &mut output,
            export_dir,
        )
        .unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ChatInput::parse("HELP"), ChatInput::Help);
        assert_eq!(ChatInput::parse("?"), ChatInput::Help);
        assert_eq!(ChatInput::parse("examples"), ChatInput::Samples);
        assert_eq!(ChatInput::parse("hist"), ChatInput::History);
        assert_eq!(ChatInput::parse("statistics"), ChatInput::Stats);
        assert_eq!(ChatInput::parse("monuments"), ChatInput::List);
        assert_eq!(ChatInput::parse("Exit"), ChatInput::Quit);
        assert_eq!(
            ChatInput::parse("What is Prague Castle?"),
            ChatInput::Question("What is Prague Castle?".to_string())
        );
    }

    #[test]
    fn test_questions_are_logged() {
        let temp = TempDir::new().unwrap();
        let (session, output) = run(
            "When was Charles Bridge built?\n\nxyzzy nonsense query\nhistory\nquit\nignored\n",
            temp.path(),
        );

        assert_eq!(session.questions_asked(), 2);
        assert_eq!(session.history()[1].monument_count, 0);
        assert!(output.contains("Charles Bridge was built between 1357-1402"));
        assert!(output.contains("Question history:"));
        assert!(output.contains("Goodbye!"));
        assert!(!output.contains("ignored"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let temp = TempDir::new().unwrap();
        let (_, output) = run("stats\n", temp.path());

        assert!(output.contains("Questions asked:      0"));
        assert!(output.contains("Monuments loaded:     5"));
        assert!(output.contains("Session ended."));
    }

    #[test]
    fn test_export_command_writes_file() {
        let temp = TempDir::new().unwrap();
        let (_, output) = run("Who built St. Vitus Cathedral?\nexport\nq\n", temp.path());

        assert!(output.contains("Session exported to"));
        let exported: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(exported.len(), 1);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            render_history(&SessionLog::new()),
            "No questions asked yet in this session."
        );
    }
}
