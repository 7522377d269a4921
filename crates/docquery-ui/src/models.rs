//! Shared data types for the Docquery browser UI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Something needs attention but nothing failed.
    Warning,
    /// An operation failed.
    Danger,
}

impl ToastKind {
    /// Suffix used for the per-severity toast CSS class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Outcome of client-side file validation.
///
/// Both the type rule and the size rule are always evaluated, so a file can
/// carry one message per failed rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileCheck {
    /// One human-readable message per failed rule, in rule order.
    pub errors: Vec<String>,
}

impl FileCheck {
    /// True when every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Failure raised by the request client.
///
/// Carries the server-supplied error message when the body had one, otherwise
/// a generic message naming the HTTP status. Callers decide how to surface it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    /// Human-readable failure description.
    pub message: String,
}

impl RequestError {
    /// Wrap a failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body for `POST /chat/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    /// The user's question.
    pub question: String,
    /// Restrict retrieval to these documents; `None` means no restriction
    /// and is serialized as an explicit `null`.
    pub document_names: Option<Vec<String>>,
}

/// Answer payload from `POST /chat/ask`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    /// Generated answer text.
    pub response: String,
    /// Citations for the retrieved chunks backing the answer.
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    /// Number of chunks supplied to the model as context.
    #[serde(default)]
    pub context_used: u32,
}

/// Citation for one retrieved chunk.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SourceRef {
    /// Name of the source document.
    pub document_name: String,
    /// Page the chunk came from.
    #[serde(default)]
    pub page_number: u32,
}

/// Status payload from `GET /documents/status/{id}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DocumentStatus {
    /// Server-side ingestion state, e.g. `processing` or `indexed`.
    pub status: String,
    /// Chunk count once ingestion finished.
    #[serde(default)]
    pub total_chunks: Option<u32>,
    /// Failure detail when ingestion errored.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Acknowledgement from `POST /chat/clear`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct ChatCleared {
    /// Whether the server dropped the conversation state.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unscoped_ask_serializes_null_document_names() {
        let body = AskRequest {
            question: "what is chunking?".to_string(),
            document_names: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"question": "what is chunking?", "document_names": null})
        );
    }

    #[test]
    fn scoped_ask_serializes_names() {
        let body = AskRequest {
            question: "q".to_string(),
            document_names: Some(vec!["a.pdf".to_string()]),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["document_names"], json!(["a.pdf"]));
    }

    #[test]
    fn ask_response_tolerates_missing_optionals() {
        let parsed: AskResponse =
            serde_json::from_value(json!({"response": "hi"})).unwrap();
        assert_eq!(parsed.response, "hi");
        assert!(parsed.sources.is_empty());
        assert_eq!(parsed.context_used, 0);
    }

    #[test]
    fn document_status_parses_full_payload() {
        let parsed: DocumentStatus = serde_json::from_value(json!({
            "status": "indexed",
            "total_chunks": 12,
            "error_message": null
        }))
        .unwrap();
        assert_eq!(parsed.status, "indexed");
        assert_eq!(parsed.total_chunks, Some(12));
        assert!(parsed.error_message.is_none());
    }

    #[test]
    fn file_check_validity_tracks_errors() {
        assert!(FileCheck::default().is_valid());
        let failed = FileCheck {
            errors: vec!["too large".to_string()],
        };
        assert!(!failed.is_valid());
    }

    #[test]
    fn request_error_displays_its_message() {
        let err = RequestError::new("bad input");
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn toast_kind_maps_to_class_suffix() {
        assert_eq!(ToastKind::Info.as_str(), "info");
        assert_eq!(ToastKind::Danger.as_str(), "danger");
    }
}
