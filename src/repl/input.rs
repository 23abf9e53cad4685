//! Input handler for the chat loop using rustyline
//!
//! Provides readline functionality with persistent history and
//! graceful interrupt handling.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Outcome of one readline call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input (possibly empty)
    Line(String),

    /// Ctrl-C; the loop should prompt again
    Interrupted,

    /// Ctrl-D; the loop should exit
    Eof,
}

/// Input handler managing the readline interface and history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: "❯ ".to_string(),
        })
    }

    /// Create an input handler with persistent history
    ///
    /// History file: `~/.tripbuddy/history`
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
            prompt: "❯ ".to_string(),
        })
    }

    /// Set a custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Read one line of input
    pub fn read_line(&mut self) -> Result<ReadOutcome> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(ReadOutcome::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err.into()),
        }
    }

    /// Persist history to disk, if a history path was configured
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }
    }
}
