use shared::{
    domain::OperationKind,
    error::{ErrorCategory, ValidationError},
};
use thiserror::Error;

/// The collaborator call did not yield a usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request to {endpoint} did not complete: {reason}")]
    Transport { endpoint: String, reason: String },
    #[error("response from {endpoint} could not be decoded: {reason}")]
    InvalidBody { endpoint: String, reason: String },
}

impl ServiceError {
    pub fn transport(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_body(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidBody {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

/// Reasons the controller refused to start an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{requested} rejected: {in_flight} operation already in progress")]
    Busy {
        requested: OperationKind,
        in_flight: OperationKind,
    },
}

impl ControllerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ControllerError::Validation(_) => ErrorCategory::Validation,
            ControllerError::Busy { .. } => ErrorCategory::Busy,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ControllerError::Validation(err) => err.user_message().to_string(),
            ControllerError::Busy { in_flight, .. } => {
                format!("Please wait: the {in_flight} request is still in progress.")
            }
        }
    }
}
