//! JSON request client for the Docquery backend.
//!
//! # Design
//! - One generic call path; the typed endpoints only pick route and body.
//! - Non-2xx responses become a [`RequestError`] carrying the body's `error`
//!   field when the server supplied one.
//! - Every failure is logged here and returned to the caller; this layer
//!   never retries and never shows user feedback itself.

use crate::logic::http_error_message;
use crate::models::{AskRequest, AskResponse, ChatCleared, DocumentStatus, RequestError};
use gloo::console;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client for the document-status and chat endpoints.
///
/// Endpoints are same-origin; an empty base URL keeps every route relative.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client. Pass an empty base URL for same-origin requests.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Look up the ingestion status of one document.
    ///
    /// # Errors
    /// Returns [`RequestError`] on transport failure, a non-JSON body, or a
    /// non-2xx status.
    pub async fn check_document_status(
        &self,
        document_id: &str,
    ) -> Result<DocumentStatus, RequestError> {
        let request = self.get(&format!("/documents/status/{document_id}"));
        call(request).await
    }

    /// Ask a question, optionally scoped to the named documents.
    ///
    /// `document_names: None` signals no scope restriction.
    ///
    /// # Errors
    /// Returns [`RequestError`] on transport failure, a non-JSON body, or a
    /// non-2xx status.
    pub async fn send_message(
        &self,
        question: &str,
        document_names: Option<Vec<String>>,
    ) -> Result<AskResponse, RequestError> {
        let body = AskRequest {
            question: question.to_string(),
            document_names,
        };
        let request = Request::post(&self.url("/chat/ask"))
            .json(&body)
            .map_err(|err| RequestError::new(err.to_string()));
        match request {
            Ok(request) => call(request).await,
            Err(err) => {
                console::error!("API call failed", err.message.clone());
                Err(err)
            }
        }
    }

    /// Reset the server-side conversation state.
    ///
    /// # Errors
    /// Returns [`RequestError`] on transport failure, a non-JSON body, or a
    /// non-2xx status.
    pub async fn clear_chat(&self) -> Result<ChatCleared, RequestError> {
        let request = Request::post(&self.url("/chat/clear"))
            .header("Content-Type", "application/json");
        call(request).await
    }

    fn get(&self, path: &str) -> Request {
        Request::get(&self.url(path)).header("Content-Type", "application/json")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

async fn call<T: DeserializeOwned>(request: Request) -> Result<T, RequestError> {
    let result = dispatch(request).await;
    if let Err(err) = &result {
        console::error!("API call failed", err.message.clone());
    }
    result
}

async fn dispatch<T: DeserializeOwned>(request: Request) -> Result<T, RequestError> {
    let response = request
        .send()
        .await
        .map_err(|err| RequestError::new(err.to_string()))?;
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|err| RequestError::new(err.to_string()))?;
    if !response.ok() {
        let detail = body.get("error").and_then(Value::as_str);
        return Err(RequestError::new(http_error_message(status, detail)));
    }
    serde_json::from_value(body).map_err(|err| RequestError::new(err.to_string()))
}
