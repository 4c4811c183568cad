//! Error types for the todo API client.
//!
//! # Design
//! Every failure a round trip can produce is classified into one variant of
//! `ApiError`: callers distinguish "the resource does not exist" from "the
//! server fell over" from "the backend is unreachable". The raw status and
//! body are kept on the variant for debugging and logged at classification
//! time; what the UI shows comes from [`ApiError::user_message`], which maps
//! each kind to a short human-readable string.

use thiserror::Error;

use crate::http::TransportError;

/// Errors surfaced by `TodoClient` and the transport layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server reported an internal failure (5xx).
    #[error("server error: HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The server rejected the payload (400/422), e.g. an empty title.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backend could not be reached at all.
    #[error("network error: {0}")]
    Network(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// Any other non-2xx status, passed through with its raw detail.
    #[error("HTTP {status}: {body}")]
    Unexpected { status: u16, body: String },
}

impl ApiError {
    /// Classify a non-success HTTP status into the matching variant.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match status {
            404 => ApiError::NotFound,
            400 | 422 => ApiError::Validation(validation_detail(body)),
            500..=599 => ApiError::Server {
                status,
                body: body.to_string(),
            },
            _ => ApiError::Unexpected {
                status,
                body: body.to_string(),
            },
        }
    }

    /// Short message suitable for the page's error banner. The raw failure
    /// detail stays in the logs; only `Validation` and `Unexpected` pass
    /// server text through to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound => "Resource not found".to_string(),
            ApiError::Server { .. } => "Server error".to_string(),
            ApiError::Network(_) => "Network error - check if backend is running".to_string(),
            ApiError::Validation(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}

/// Pull the human-readable detail out of a `{"detail": …}` error body, the
/// shape the backend uses for validation rejections. Falls back to the raw
/// body, or a generic message when the body is empty.
fn validation_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            if body.is_empty() {
                "Invalid todo data".to_string()
            } else {
                body.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound));
    }

    #[test]
    fn status_5xx_maps_to_server() {
        let err = ApiError::from_status(503, "unavailable");
        assert!(matches!(err, ApiError::Server { status: 503, .. }));
        assert_eq!(err.user_message(), "Server error");
    }

    #[test]
    fn status_422_extracts_detail() {
        let err = ApiError::from_status(422, r#"{"detail":"Title must not be empty"}"#);
        match &err {
            ApiError::Validation(detail) => assert_eq!(detail, "Title must not be empty"),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(err.user_message(), "Title must not be empty");
    }

    #[test]
    fn status_400_without_detail_falls_back_to_body() {
        let err = ApiError::from_status(400, "bad request");
        assert!(matches!(&err, ApiError::Validation(d) if d == "bad request"));
    }

    #[test]
    fn unexpected_status_passes_through() {
        let err = ApiError::from_status(418, "teapot");
        assert!(matches!(err, ApiError::Unexpected { status: 418, .. }));
    }

    #[test]
    fn transport_error_becomes_network() {
        let err: ApiError = TransportError("connection refused".to_string()).into();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(
            err.user_message(),
            "Network error - check if backend is running"
        );
    }
}
