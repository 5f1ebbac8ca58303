//! threatboard — demo security dashboard backend.
//!
//! Loads threat, traffic and login-attempt records (normalized from a CSV
//! file, or the built-in sample), writes them to JSON snapshot files, and
//! serves them read-only over HTTP. This crate re-exports the core layers so
//! that integration tests and benches can import them directly.
//!
//! # Architecture
//!
//! ```text
//! CSV / sample ──► Normalizer ──► Snapshot ──► JSON files
//!                                    │
//!                                    └──► axum router (threatboard-web)
//! ```

pub use threatboard_core::{config, error, ingest, normalizer, sample, store, types};
pub use threatboard_core::{
    Behavior, DataOrigin, Dataset, GeoLocation, IngestError, LoginAttemptRecord, LoginStatus,
    Normalized, Normalizer, RawRow, Severity, Snapshot, StoreError, ThreatRecord, TrafficRecord,
    TrafficStatus,
};
pub use threatboard_web as web;

use anyhow::Context;
use rand::Rng;

/// Build the startup snapshot from `config`: the configured CSV when
/// usable, the built-in sample otherwise.
pub fn build_snapshot<R: Rng + ?Sized>(
    config: &config::Config,
    rng: &mut R,
) -> anyhow::Result<Snapshot> {
    let normalizer =
        Normalizer::from_config(config).context("invalid login keyword configuration")?;
    let (dataset, origin) = ingest::load_dataset(config, &normalizer, rng);
    let snapshot = Snapshot::new(dataset, origin);
    tracing::info!(
        origin = %snapshot.origin(),
        built_at = %snapshot.built_at().to_rfc3339(),
        threats = snapshot.threats().len(),
        traffic = snapshot.traffic().len(),
        logins = snapshot.login_attempts().len(),
        "snapshot built"
    );
    Ok(snapshot)
}
