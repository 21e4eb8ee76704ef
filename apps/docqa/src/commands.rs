//! Line commands typed at the prompt and their dispatch to the controller.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use client_core::InteractionController;
use shared::domain::Document;
use thiserror::Error;
use tracing::debug;

use crate::presenter::render;

pub const HELP: &str = "\
Commands:
  open <path>       select a document
  upload            upload the selected document
  question <text>   set the question text
  ask [text]        ask the question (optionally replacing it first)
  show              print the current state
  help              print this help
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Open { path: PathBuf },
    Upload,
    Question { text: String },
    Ask { text: Option<String> },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}'; type 'help' for the list")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

pub fn parse_command(line: &str) -> Result<UserCommand, CommandParseError> {
    let line = line.trim_start();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line.trim_end(), ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "" => Err(CommandParseError::Empty),
        "open" => {
            let path = rest.trim();
            if path.is_empty() {
                return Err(CommandParseError::MissingArgument {
                    command: "open",
                    argument: "a file path",
                });
            }
            Ok(UserCommand::Open {
                path: PathBuf::from(path),
            })
        }
        "upload" => Ok(UserCommand::Upload),
        "question" | "q" => Ok(UserCommand::Question {
            text: rest.to_string(),
        }),
        "ask" => Ok(UserCommand::Ask {
            text: (!rest.trim().is_empty()).then(|| rest.to_string()),
        }),
        "show" => Ok(UserCommand::Show),
        "help" | "?" => Ok(UserCommand::Help),
        "quit" | "exit" => Ok(UserCommand::Quit),
        other => Err(CommandParseError::Unknown(other.to_string())),
    }
}

pub async fn load_document(path: &Path) -> anyhow::Result<Document> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let document = Document::new(filename, bytes);
    Ok(match mime_guess::from_path(path).first_raw() {
        Some(mime_type) => document.with_mime_type(mime_type),
        None => document,
    })
}

/// Runs one command. Upload and ask are spawned so the prompt stays live;
/// their outcome reaches the user through controller events.
/// Returns text to print directly, if any.
pub async fn dispatch(
    controller: &Arc<InteractionController>,
    command: UserCommand,
) -> Option<String> {
    debug!(?command, "dispatching user command");
    match command {
        UserCommand::Open { path } => match load_document(&path).await {
            Ok(document) => {
                controller.select_document(document).await;
                None
            }
            Err(err) => Some(format!("[error] {err:#}")),
        },
        UserCommand::Upload => {
            let controller = Arc::clone(controller);
            tokio::spawn(async move {
                if let Err(err) = controller.submit_document().await {
                    debug!(error = %err, "upload not started");
                }
            });
            None
        }
        UserCommand::Question { text } => {
            controller.set_question_text(text).await;
            None
        }
        UserCommand::Ask { text } => {
            if let Some(text) = text {
                controller.set_question_text(text).await;
            }
            let controller = Arc::clone(controller);
            tokio::spawn(async move {
                if let Err(err) = controller.submit_question().await {
                    debug!(error = %err, "ask not started");
                }
            });
            None
        }
        UserCommand::Show => Some(render(&controller.snapshot().await)),
        UserCommand::Help => Some(HELP.to_string()),
        UserCommand::Quit => None,
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
