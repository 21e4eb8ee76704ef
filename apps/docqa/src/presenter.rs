//! Terminal rendering of controller state. No decisions are made here; it
//! only maps what the snapshot says onto text.

use client_core::{ControllerEvent, Notice, NoticeLevel, SessionSnapshot};
use shared::domain::AnswerKind;
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tracing::warn;

pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut lines = Vec::new();

    lines.push(match &snapshot.selected_document {
        Some(doc) => format!(
            "Document: {} ({}, {} bytes)",
            doc.filename,
            doc.mime_type.as_deref().unwrap_or("unknown type"),
            doc.size_bytes
        ),
        None => "Document: none selected".to_string(),
    });
    lines.push(format!("Question: {}", snapshot.question_text));

    let (upload_label, ask_label) = if snapshot.busy {
        ("Uploading...", "Thinking...")
    } else {
        ("Upload", "Ask")
    };
    lines.push(format!("[{upload_label}] [{ask_label}]"));

    match snapshot.answer_kind {
        AnswerKind::None => {}
        AnswerKind::Answer => {
            lines.push("Answer:".to_string());
            lines.push(format!("  {}", snapshot.answer_text));
        }
        AnswerKind::Error => {
            lines.push("Error:".to_string());
            lines.push(format!("  {}", snapshot.answer_text));
        }
    }

    lines.join("\n")
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "notice",
        NoticeLevel::Error => "error",
        NoticeLevel::Blocking => "blocked",
    };
    format!("[{tag}] {}", notice.message)
}

/// Re-renders on every controller event until the controller is dropped.
pub async fn run(mut events: Receiver<ControllerEvent>) {
    loop {
        match events.recv().await {
            Ok(ControllerEvent::SessionChanged(snapshot)) => println!("{}\n", render(&snapshot)),
            Ok(ControllerEvent::Notice(notice)) => println!("{}", render_notice(&notice)),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "presenter fell behind controller events")
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
