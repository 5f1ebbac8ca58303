//! Route table for the dashboard API and pages.

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::path::Path;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::error::panic_response;
use crate::handlers;
use crate::pages;
use crate::state::AppState;

pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::dashboard))
        .route("/simple", get(pages::simple))
        .route("/test", get(pages::test))
        .route("/api/threats", get(handlers::threats))
        .route("/api/traffic", get(handlers::traffic))
        .route("/api/login-attempts", get(handlers::login_attempts))
        .route("/api/threat/{id}", get(handlers::threat))
        .nest_service(
            "/static",
            ServeDir::new(static_dir).not_found_service(handlers::not_found.into_service()),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
