//! Seam between the controller and the remote document Q&A service.

use async_trait::async_trait;
use shared::{
    domain::Document,
    protocol::{AskResponse, UploadResponse},
};

use crate::error::ServiceError;

/// A completed call: the HTTP-like status plus the decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply<T> {
    pub status: u16,
    pub body: T,
}

impl<T> ServiceReply<T> {
    pub fn ok(body: T) -> Self {
        Self { status: 200, body }
    }

    pub fn with_status(status: u16, body: T) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub type UploadResult = Result<ServiceReply<UploadResponse>, ServiceError>;
pub type AskResult = Result<ServiceReply<AskResponse>, ServiceError>;

#[async_trait]
pub trait DocumentQaService: Send + Sync {
    async fn upload_document(&self, document: &Document) -> UploadResult;
    async fn ask_question(&self, question: &str) -> AskResult;
}
