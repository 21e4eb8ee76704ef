//! Client core for the document Q&A app: session state, the interaction
//! controller, and the service seam it talks through.

pub mod classify;
pub mod controller;
pub mod error;
pub mod service;
mod session;
pub mod transport;

pub use classify::{
    classify_answer, classify_upload, Classification, ASK_FAILED_MESSAGE, NO_ANSWER_MESSAGE,
    UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCEEDED_MESSAGE,
};
pub use controller::{ControllerEvent, InteractionController};
pub use error::{ControllerError, ServiceError};
pub use service::{AskResult, DocumentQaService, ServiceReply, UploadResult};
pub use session::{Notice, NoticeLevel, SessionSnapshot};
pub use transport::HttpDocumentQaService;
