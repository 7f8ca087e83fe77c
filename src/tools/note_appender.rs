use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::config::NotesConfig;
use super::Tool;

/// First line of a freshly created note file.
const HEADER: &str = "# OAI\n";

/// Appends bulleted lines to the note file.
///
/// The existence check and the header creation use the fallback path, while
/// the append itself targets the configured notes path. Two distinct files
/// can result when the paths differ; this mirrors the observed behavior and
/// is kept intact (see DESIGN.md).
pub struct NoteAppender {
    note_path: PathBuf,
    fallback_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct AddNoteArgs {
    message: String,
}

impl NoteAppender {
    pub fn new(notes: &NotesConfig) -> Self {
        Self {
            note_path: PathBuf::from(&notes.notes_dir).join(&notes.note_file),
            fallback_path: PathBuf::from(&notes.fallback_dir).join(&notes.note_file),
        }
    }

    /// Ensure the note file exists; when it does not, write the header file
    /// at the fallback path.
    fn ensure_file(&self) -> Result<()> {
        if !self.note_path.exists() {
            std::fs::write(&self.fallback_path, HEADER)
                .with_context(|| format!(
                    "Failed to create note file: {}",
                    self.fallback_path.display()
                ))?;
            log::info!(
                "NoteAppender: created {} with header",
                self.fallback_path.display()
            );
        }
        Ok(())
    }

    /// Append `message` as a bullet line and return the confirmation string.
    ///
    /// Empty messages are accepted and produce an empty bullet.
    pub fn add_note(&self, message: &str) -> Result<String> {
        self.ensure_file()?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.note_path)
            .with_context(|| format!(
                "Failed to open note file: {}",
                self.note_path.display()
            ))?;

        file.write_all(format!("- {}\n", message).as_bytes())
            .with_context(|| format!(
                "Failed to write note: {}",
                self.note_path.display()
            ))?;

        log::info!("NoteAppender: appended note to {}", self.note_path.display());
        Ok(format!("Added note: {}", message))
    }
}

#[async_trait::async_trait]
impl Tool for NoteAppender {
    fn name(&self) -> &str {
        "add_note"
    }

    fn description(&self) -> &str {
        "Add a note to the obsidian file"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" }
            },
            "required": ["message"]
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        let args: AddNoteArgs = serde_json::from_value(args)
            .context("Invalid arguments for add_note")?;
        let confirmation = self.add_note(&args.message)?;
        Ok(json!(confirmation))
    }
}
