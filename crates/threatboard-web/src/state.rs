//! Shared handler state.

use std::sync::Arc;
use threatboard_core::Snapshot;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}
