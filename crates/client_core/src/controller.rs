//! Interaction controller: owns the session and sequences upload/ask.

use std::sync::Arc;

use shared::{
    domain::{AnswerKind, Document, OperationKind},
    error::ValidationError,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::{
    classify::{classify_answer, classify_upload, Classification},
    error::ControllerError,
    service::DocumentQaService,
    session::{Notice, NoticeLevel, Session, SessionSnapshot},
};

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Published after every session mutation.
    SessionChanged(SessionSnapshot),
    Notice(Notice),
}

pub struct InteractionController {
    service: Arc<dyn DocumentQaService>,
    inner: Mutex<Session>,
    events: broadcast::Sender<ControllerEvent>,
}

impl InteractionController {
    pub fn new(service: Arc<dyn DocumentQaService>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            service,
            inner: Mutex::new(Session::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().await.snapshot()
    }

    /// Replaces the selected document. Allowed while busy; an upload already
    /// in flight keeps the document it started with.
    pub async fn select_document(&self, document: Document) {
        let mut guard = self.inner.lock().await;
        debug!(
            filename = %document.filename,
            size_bytes = document.size_bytes(),
            "upload: document selected"
        );
        guard.selected_document = Some(Arc::new(document));
        self.publish_snapshot(&guard);
    }

    pub async fn set_question_text(&self, text: impl Into<String>) {
        let mut guard = self.inner.lock().await;
        guard.question_text = text.into();
        self.publish_snapshot(&guard);
    }

    /// Sends the selected document to the service. Failures of the call
    /// itself are reported through the returned notice, not as `Err`.
    pub async fn submit_document(&self) -> Result<Notice, ControllerError> {
        let document = {
            let mut guard = self.inner.lock().await;
            if let Err(err) = guard.ensure_idle(OperationKind::Upload) {
                return Err(self.refuse(OperationKind::Upload, err));
            }
            let Some(document) = guard.selected_document.clone() else {
                return Err(self.refuse(
                    OperationKind::Upload,
                    ValidationError::NoDocumentSelected.into(),
                ));
            };
            guard.begin(OperationKind::Upload);
            self.publish_snapshot(&guard);
            document
        };

        info!(
            filename = %document.filename,
            size_bytes = document.size_bytes(),
            "upload: sending document"
        );
        let result = self.service.upload_document(&document).await;
        match &result {
            Ok(reply) if reply.is_success() => {
                info!(status = reply.status, "upload: service accepted document");
                if let Some(detail) = reply.body.error() {
                    warn!(error = detail, "upload: accepted reply carried an error field");
                }
            }
            Ok(reply) => warn!(
                status = reply.status,
                error = reply.body.error().unwrap_or_default(),
                "upload: service rejected document"
            ),
            Err(err) => error!(error = %err, "upload: request failed"),
        }
        let notice = classify_upload(&result);

        self.publish(ControllerEvent::Notice(notice.clone()));
        {
            let mut guard = self.inner.lock().await;
            guard.finish(OperationKind::Upload);
            self.publish_snapshot(&guard);
        }
        Ok(notice)
    }

    pub async fn submit_question(&self) -> Result<Classification, ControllerError> {
        let question = {
            let mut guard = self.inner.lock().await;
            if let Err(err) = guard.ensure_idle(OperationKind::Ask) {
                return Err(self.refuse(OperationKind::Ask, err));
            }
            if guard.question_text.trim().is_empty() {
                return Err(
                    self.refuse(OperationKind::Ask, ValidationError::EmptyQuestion.into())
                );
            }
            guard.begin(OperationKind::Ask);
            guard.reset_answer();
            self.publish_snapshot(&guard);
            guard.question_text.clone()
        };

        info!(question_len = question.len(), "ask: sending question");
        let result = self.service.ask_question(&question).await;
        match &result {
            Ok(reply) => debug!(status = reply.status, "ask: service replied"),
            Err(err) => error!(error = %err, "ask: request failed"),
        }
        let classification = classify_answer(&result);
        match classification.kind {
            AnswerKind::Answer => info!("ask: answer received"),
            _ => warn!(
                category = ?classification.failure,
                message = %classification.text,
                "ask: classified as error"
            ),
        }

        {
            let mut guard = self.inner.lock().await;
            guard.apply_answer(&classification);
            guard.finish(OperationKind::Ask);
            self.publish_snapshot(&guard);
        }
        Ok(classification)
    }

    fn refuse(&self, operation: OperationKind, err: ControllerError) -> ControllerError {
        warn!(
            operation = operation.as_str(),
            category = ?err.category(),
            error = %err,
            "{operation}: operation refused"
        );
        self.publish(ControllerEvent::Notice(Notice::new(
            NoticeLevel::Blocking,
            operation,
            err.user_message(),
        )));
        err
    }

    fn publish_snapshot(&self, session: &Session) {
        self.publish(ControllerEvent::SessionChanged(session.snapshot()));
    }

    fn publish(&self, event: ControllerEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
