//! HTTP implementation of [`DocumentQaService`] on top of reqwest.

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::{Document, OperationKind},
    protocol::{AskRequest, UPLOAD_FILE_FIELD},
};
use tracing::debug;
use url::Url;

use crate::{
    error::ServiceError,
    service::{AskResult, DocumentQaService, ServiceReply, UploadResult},
};

pub const DEFAULT_UPLOAD_PATH: &str = "upload_pdf";
pub const DEFAULT_ASK_PATH: &str = "ask_question";

pub struct HttpDocumentQaService {
    http: Client,
    upload_url: Url,
    ask_url: Url,
}

impl HttpDocumentQaService {
    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        Self::with_endpoints(base_url, DEFAULT_UPLOAD_PATH, DEFAULT_ASK_PATH)
    }

    pub fn with_endpoints(
        base_url: &Url,
        upload_path: &str,
        ask_path: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: Client::new(),
            upload_url: endpoint_url(base_url, upload_path)?,
            ask_url: endpoint_url(base_url, ask_path)?,
        })
    }

    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn ask_url(&self) -> &Url {
        &self.ask_url
    }
}

#[async_trait]
impl DocumentQaService for HttpDocumentQaService {
    async fn upload_document(&self, document: &Document) -> UploadResult {
        let endpoint = self.upload_url.as_str();
        let part = Part::bytes(document.bytes.clone()).file_name(document.filename.clone());
        let part = match &document.mime_type {
            Some(mime_type) => part
                .mime_str(mime_type)
                .map_err(|err| ServiceError::transport(endpoint, err))?,
            None => part,
        };
        let form = Form::new().part(UPLOAD_FILE_FIELD, part);

        let response = self
            .http
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|err| ServiceError::transport(endpoint, err))?;
        decode_reply(OperationKind::Upload, endpoint, response).await
    }

    async fn ask_question(&self, question: &str) -> AskResult {
        let endpoint = self.ask_url.as_str();
        let response = self
            .http
            .post(self.ask_url.clone())
            .json(&AskRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|err| ServiceError::transport(endpoint, err))?;
        decode_reply(OperationKind::Ask, endpoint, response).await
    }
}

/// Reads the whole body regardless of status. The body must be a JSON
/// object; only an upload reply may be empty, which decodes to the default.
async fn decode_reply<T>(
    operation: OperationKind,
    endpoint: &str,
    response: Response,
) -> Result<ServiceReply<T>, ServiceError>
where
    T: DeserializeOwned + Default,
{
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ServiceError::transport(endpoint, err))?;
    debug!(
        endpoint,
        status = status.as_u16(),
        len = bytes.len(),
        "{operation}: service reply received"
    );

    let body = if bytes.iter().all(u8::is_ascii_whitespace) {
        match operation {
            OperationKind::Upload => T::default(),
            OperationKind::Ask => return Err(ServiceError::invalid_body(endpoint, "empty body")),
        }
    } else {
        decode_object(endpoint, &bytes)?
    };
    Ok(ServiceReply::with_status(status.as_u16(), body))
}

// Derived deserializers also accept sequences, so reject anything that is
// not an object before mapping fields.
fn decode_object<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> Result<T, ServiceError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| ServiceError::invalid_body(endpoint, err))?;
    if !value.is_object() {
        return Err(ServiceError::invalid_body(endpoint, "expected a JSON object"));
    }
    serde_json::from_value(value).map_err(|err| ServiceError::invalid_body(endpoint, err))
}

/// Joins `path` onto `base` as a child, keeping any path prefix on `base`.
fn endpoint_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path.trim_start_matches('/'))
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
