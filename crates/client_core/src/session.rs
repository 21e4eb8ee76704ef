use std::sync::Arc;

use shared::domain::{AnswerKind, Document, DocumentSummary, OperationKind};

use crate::{classify::Classification, error::ControllerError};

/// Live client state. Only the controller mutates it.
#[derive(Debug, Default)]
pub(crate) struct Session {
    pub(crate) selected_document: Option<Arc<Document>>,
    pub(crate) question_text: String,
    pub(crate) answer_text: String,
    pub(crate) answer_kind: AnswerKind,
    pub(crate) in_flight: Option<OperationKind>,
}

impl Session {
    pub(crate) fn ensure_idle(&self, requested: OperationKind) -> Result<(), ControllerError> {
        match self.in_flight {
            Some(in_flight) => Err(ControllerError::Busy {
                requested,
                in_flight,
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn begin(&mut self, operation: OperationKind) {
        debug_assert!(self.in_flight.is_none());
        self.in_flight = Some(operation);
    }

    pub(crate) fn finish(&mut self, operation: OperationKind) {
        debug_assert_eq!(self.in_flight, Some(operation));
        self.in_flight = None;
    }

    pub(crate) fn reset_answer(&mut self) {
        self.answer_text.clear();
        self.answer_kind = AnswerKind::None;
    }

    pub(crate) fn apply_answer(&mut self, classification: &Classification) {
        self.answer_text = classification.text.clone();
        self.answer_kind = classification.kind;
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected_document: self
                .selected_document
                .as_deref()
                .map(DocumentSummary::from),
            question_text: self.question_text.clone(),
            answer_text: self.answer_text.clone(),
            answer_kind: self.answer_kind,
            busy: self.in_flight.is_some(),
            in_flight: self.in_flight,
        }
    }
}

/// Read-only copy of the session handed to presenters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub selected_document: Option<DocumentSummary>,
    pub question_text: String,
    pub answer_text: String,
    pub answer_kind: AnswerKind,
    pub busy: bool,
    pub in_flight: Option<OperationKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Transient confirmation.
    Info,
    /// Transient failure report.
    Error,
    /// The action was refused before any request was sent.
    Blocking,
}

/// A message for the user that never enters session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub operation: OperationKind,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, operation: OperationKind, message: impl Into<String>) -> Self {
        Self {
            level,
            operation,
            message: message.into(),
        }
    }
}
