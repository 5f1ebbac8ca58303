//! HTTP error responses.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No threat carries the requested id. Distinct from an empty list.
    #[error("threat {0:?} not found")]
    ThreatNotFound(String),

    /// No route matched.
    #[error("no route for {0}")]
    PageNotFound(Uri),

    /// A handler failed unexpectedly.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ThreatNotFound(id) => {
                tracing::debug!(%id, "threat lookup miss");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Threat not found" })),
                )
                    .into_response()
            }
            ApiError::PageNotFound(uri) => (
                StatusCode::NOT_FOUND,
                format!(
                    "404 Error: Page not found. The requested URL {} was not found on the server.",
                    uri.path()
                ),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 Error: Internal server error.",
                )
                    .into_response()
            }
        }
    }
}

/// Turns a handler panic into the plain-text 500 page.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
