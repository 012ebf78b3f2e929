//! # HTTP Errors
//!
//! Error type for the todo HTTP surface. Every error is rendered as
//! `{"error": "<message>"}` with the status from [`ApiError::status_code`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Id segment is digits but not a valid id
    #[error("Invalid Todo ID")]
    InvalidId,

    /// Body is not valid JSON or does not match the request schema
    #[error("Invalid Request Payload")]
    InvalidPayload,

    /// No todo with the requested id
    #[error("Todo Not Found")]
    TodoNotFound,

    /// No route matches the request path
    #[error("Not Found")]
    RouteNotFound,

    /// Path is known but the method is not bound
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure; the message is passed through unchanged
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::TodoNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::TodoNotFound,
            StoreError::Storage(msg) => ApiError::Storage(msg),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidPayload.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::TodoNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Storage("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert_eq!(ApiError::from(StoreError::NotFound), ApiError::TodoNotFound);
        assert_eq!(
            ApiError::from(StoreError::Storage("connection refused".to_string())),
            ApiError::Storage("connection refused".to_string())
        );
    }

    #[test]
    fn test_storage_message_is_exposed() {
        let err = ApiError::Storage("relation \"todos\" does not exist".to_string());
        let body = ErrorResponse::from(err);
        assert_eq!(body.error, "relation \"todos\" does not exist");
    }

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_value(ErrorResponse::from(ApiError::TodoNotFound)).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Todo Not Found"}));
    }
}
