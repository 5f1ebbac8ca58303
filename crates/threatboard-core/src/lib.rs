//! threatboard-core — record types, normalizer and snapshot store.
//!
//! # Architecture
//!
//! ```text
//! CSV ──► Ingest ──► Normalizer ──┐
//!                                 ├──► Snapshot ──► persist (JSON files)
//!          built-in sample ───────┘        │
//!                                          └──► HTTP layer (read-only)
//! ```
//!
//! Everything here is synchronous. The snapshot is built once before the
//! server starts and never changes afterwards.

pub mod config;
pub mod error;
pub mod ingest;
pub mod normalizer;
pub mod sample;
pub mod store;
pub mod types;

pub use error::{IngestError, StoreError};
pub use normalizer::{Normalized, Normalizer, RawRow};
pub use store::Snapshot;
pub use types::{
    Behavior, DataOrigin, Dataset, GeoLocation, LoginAttemptRecord, LoginStatus, Severity,
    ThreatRecord, TrafficRecord, TrafficStatus,
};
