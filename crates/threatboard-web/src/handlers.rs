//! JSON API handlers. All read-only.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{OriginalUri, Path, State},
    response::{IntoResponse, Response},
    Json,
};

pub async fn threats(State(state): State<AppState>) -> Response {
    Json(state.snapshot.threats()).into_response()
}

pub async fn traffic(State(state): State<AppState>) -> Response {
    Json(state.snapshot.traffic()).into_response()
}

pub async fn login_attempts(State(state): State<AppState>) -> Response {
    Json(state.snapshot.login_attempts()).into_response()
}

pub async fn threat(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    state
        .snapshot
        .threat(&id)
        .map(|t| Json(t).into_response())
        .ok_or(ApiError::ThreatNotFound(id))
}

/// Unmatched routes and missing static files.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::PageNotFound(uri)
}
