//! Wire bodies exchanged with the document Q&A service.

use serde::{Deserialize, Serialize};

/// Multipart field name carrying the uploaded document.
pub const UPLOAD_FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }

    pub fn error(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }
}

impl AskResponse {
    pub fn answer(&self) -> Option<&str> {
        non_empty(self.answer.as_deref())
    }

    pub fn error(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }
}

// Empty strings are treated the same as a missing field.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
