use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a failure originated, used for labeling and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    Transport,
    Application,
    Busy,
}

/// Local precondition failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no document selected")]
    NoDocumentSelected,
    #[error("empty question")]
    EmptyQuestion,
}

impl ValidationError {
    /// Text shown to the user in the blocking notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NoDocumentSelected => "Please select a document first!",
            ValidationError::EmptyQuestion => "Please enter a question!",
        }
    }
}
