//! Core record types for threatboard-core.
//!
//! This module defines the three record shapes served by the dashboard — the
//! [`ThreatRecord`], the [`TrafficRecord`], and the [`LoginAttemptRecord`] —
//! plus the small label enums they carry. Field names serialize in the
//! camelCase form the dashboard front-end consumes.

use serde::{Deserialize, Serialize};

/// Geographic position attached to a threat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    pub city: String,
}

/// A suspicious IP address and what is known about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatRecord {
    /// Sequential identifier, unique within the threat collection.
    pub id: String,
    /// Not validated as a real address.
    pub ip_address: String,
    /// Category label (Malicious, Scanning, …). Kept as a string because
    /// ingestion tables may map to labels outside the built-in set.
    #[serde(rename = "type")]
    pub category: String,
    pub severity: Severity,
    /// ISO-8601-like, never parsed.
    pub last_seen: String,
    pub count: u64,
    pub description: String,
    pub source: String,
    pub location: GeoLocation,
}

/// A single observed network flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficRecord {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "sourceIP")]
    pub source_ip: String,
    #[serde(rename = "destinationIP")]
    pub destination_ip: String,
    pub protocol: String,
    /// Expected 1–65535, not checked.
    pub port: u32,
    pub bytes_transferred: u64,
    pub packets_transferred: u64,
    /// Seconds.
    pub duration: f64,
    pub status: TrafficStatus,
}

/// An authentication event worth surfacing on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAttemptRecord {
    pub id: String,
    pub timestamp: String,
    pub username: String,
    pub ip_address: String,
    pub device_info: String,
    /// `"city, country"`.
    pub location: String,
    pub status: LoginStatus,
    pub behavior: Behavior,
    /// Expected 0–100, not checked.
    pub anomaly_score: f64,
    pub description: String,
}

/// Threat severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// What the perimeter did with a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficStatus {
    Blocked,
    Flagged,
    Allowed,
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginStatus {
    Failed,
    Successful,
    Blocked,
}

/// Behaviour classification of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    #[serde(rename = "Authentication Attempt")]
    AuthenticationAttempt,
    #[serde(rename = "Highly Suspicious Activity")]
    HighlySuspicious,
    #[serde(rename = "Unusual Behavior")]
    Unusual,
    #[serde(rename = "Suspicious Login")]
    SuspiciousLogin,
}

/// The three collections, built together and immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub threats: Vec<ThreatRecord>,
    pub traffic: Vec<TrafficRecord>,
    pub login_attempts: Vec<LoginAttemptRecord>,
}

/// Where a snapshot's records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// Normalized from a CSV file.
    Csv {
        path: std::path::PathBuf,
        rows_read: usize,
        rows_skipped: usize,
    },
    /// The built-in sample set.
    Sample,
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataOrigin::Csv {
                path,
                rows_read,
                rows_skipped,
            } => write!(
                f,
                "csv {} ({rows_read} rows, {rows_skipped} skipped)",
                path.display()
            ),
            DataOrigin::Sample => write!(f, "built-in sample"),
        }
    }
}
