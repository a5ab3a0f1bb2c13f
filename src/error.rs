//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{StoreError, StoreErrorKind};

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Structured store error with operation context
    #[error("{0}")]
    Store(StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        // A missing record is a client-visible 404, not a server fault
        if e.kind == StoreErrorKind::NotFound {
            Self::NotFound(e.message)
        } else {
            Self::Store(e)
        }
    }
}

/// Error response body for server-side failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Error code
    pub code: String,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create an error response with a code
    pub fn new(status: StatusCode, code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // NotFound and BadRequest render an empty body: the upstream
            // contract is the bare status code, nothing else.
            Error::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND.into_response()
            }

            Error::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                StatusCode::BAD_REQUEST.into_response()
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                let body = ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "Configuration error",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }

            Error::Store(e) => {
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    "Store error: {}", e.message
                );
                let body = ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Store operation failed",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                let body = ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IO_ERROR",
                    "I/O operation failed",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreOperation;

    #[tokio::test]
    async fn test_not_found_renders_empty_body() {
        let response = Error::NotFound("user 2".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_bad_request_renders_empty_body() {
        let response = Error::BadRequest("name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_internal_error_renders_json_envelope() {
        let response = Error::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.code, "INTERNAL_ERROR");
        assert_eq!(parsed.status, 500);
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let store_error = StoreError::not_found(StoreOperation::Delete, 42);
        let error = Error::from(store_error);
        assert!(matches!(error, Error::NotFound(_)));
    }

    #[test]
    fn test_store_other_maps_to_store_variant() {
        let store_error = StoreError::other(StoreOperation::FindAll, "backend offline");
        let error = Error::from(store_error);
        assert!(matches!(error, Error::Store(_)));
    }
}
