//! threatboard web — read-only JSON API and dashboard pages over a
//! [`Snapshot`](threatboard_core::Snapshot).
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | dashboard page |
//! | `GET /simple` | minimal page |
//! | `GET /test` | liveness string |
//! | `GET /api/threats` | all threats |
//! | `GET /api/traffic` | all traffic flows |
//! | `GET /api/login-attempts` | all login attempts |
//! | `GET /api/threat/{id}` | one threat, or 404 |
//! | `GET /static/*` | files from the static directory; misses get the 404 page |

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::app_router;
pub use state::AppState;

use anyhow::Context;
use std::path::Path;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, state: AppState, static_dir: &Path) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app_router(state, static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
