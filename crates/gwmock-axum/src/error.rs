//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` to HTTP status codes and response bodies.
//! The emulated API is not uniform about error bodies: parse failures come
//! back as plain text while missing entities get a JSON `message` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gwmock_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request body or query failed to parse. Body is the raw parser error.
    #[error("{0}")]
    MalformedRequest(String),

    /// Unknown identifier.
    #[error("{0}")]
    NotFound(String),

    /// Unsupported method on a known path.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedRequest(raw) => (StatusCode::BAD_REQUEST, raw).into_response(),
            Self::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, axum::Json(MessageBody { message })).into_response()
            }
            Self::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(MessageBody { message }),
                )
                    .into_response()
            }
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { kind, id } => {
                tracing::debug!(%kind, %id, "entity not found");
                Self::NotFound(format!("{kind} not found: {id}"))
            }
            CoreError::MalformedPayload(raw) => {
                tracing::warn!(error = %raw, "rejected malformed payload");
                Self::MalformedRequest(raw)
            }
            CoreError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("Serialization: {err}"))
    }
}
