//! Request extractors
//!
//! `TodoPath` parses the `{id}` segment and `JsonBody` decodes the request
//! body. Both reject with [`ApiError`] so failures render as JSON.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::TodoId;

use super::errors::{ApiError, ApiResult};

/// Parse an id path segment
///
/// Anything other than `[0-9]+` does not match the route at all. A digit
/// string that does not fit in a [`TodoId`] is an invalid id.
pub fn parse_todo_id(raw: &str) -> ApiResult<TodoId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse::<TodoId>().map_err(|_| ApiError::InvalidId)
}

/// The `{id}` segment of `/todo/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoPath(pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;
        parse_todo_id(&raw).map(TodoPath)
    }
}

/// JSON request body
///
/// Unlike `axum::Json` this ignores the `Content-Type` header and maps every
/// decode failure to `400 Invalid Request Payload`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "failed to read request body");
            ApiError::InvalidPayload
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!(error = %e, "failed to decode request body");
            ApiError::InvalidPayload
        })
    }
}
