//! Maps collaborator results onto what the user gets to see.

use shared::{
    domain::{AnswerKind, OperationKind},
    error::ErrorCategory,
};

use crate::{
    service::{AskResult, UploadResult},
    session::{Notice, NoticeLevel},
};

pub const ASK_FAILED_MESSAGE: &str = "Failed to get answer from backend.";
pub const NO_ANSWER_MESSAGE: &str = "No answer received.";
pub const UPLOAD_SUCCEEDED_MESSAGE: &str = "Document uploaded successfully!";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload document. Check the logs for details.";

/// Outcome of an ask operation. `kind` is never `AnswerKind::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: AnswerKind,
    pub text: String,
    pub failure: Option<ErrorCategory>,
}

impl Classification {
    fn answer(text: &str) -> Self {
        Self {
            kind: AnswerKind::Answer,
            text: text.to_string(),
            failure: None,
        }
    }

    fn error(text: &str, failure: ErrorCategory) -> Self {
        Self {
            kind: AnswerKind::Error,
            text: text.to_string(),
            failure: Some(failure),
        }
    }
}

/// First matching rule wins: transport failure, failed status, error
/// field, answer field, then the "no answer" fallback.
pub fn classify_answer(result: &AskResult) -> Classification {
    let reply = match result {
        Ok(reply) => reply,
        Err(_) => return Classification::error(ASK_FAILED_MESSAGE, ErrorCategory::Transport),
    };

    if !reply.is_success() {
        let text = reply.body.error().unwrap_or(ASK_FAILED_MESSAGE);
        return Classification::error(text, ErrorCategory::Application);
    }
    if let Some(error) = reply.body.error() {
        return Classification::error(error, ErrorCategory::Application);
    }
    if let Some(answer) = reply.body.answer() {
        return Classification::answer(answer);
    }
    Classification::error(NO_ANSWER_MESSAGE, ErrorCategory::Application)
}

pub fn classify_upload(result: &UploadResult) -> Notice {
    let reply = match result {
        Ok(reply) => reply,
        Err(_) => {
            return Notice::new(
                NoticeLevel::Error,
                OperationKind::Upload,
                UPLOAD_FAILED_MESSAGE,
            )
        }
    };

    if !reply.is_success() {
        let text = reply.body.error().unwrap_or(UPLOAD_FAILED_MESSAGE);
        return Notice::new(NoticeLevel::Error, OperationKind::Upload, text);
    }
    let text = reply.body.message().unwrap_or(UPLOAD_SUCCEEDED_MESSAGE);
    Notice::new(NoticeLevel::Info, OperationKind::Upload, text)
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
