//! Normalizer — maps raw CSV rows into threat, traffic and login-attempt records.
//!
//! One pass over the input, at most `row_limit` rows consumed. Each row may
//! emit zero or one record of each kind; eligibility, label mapping and
//! fallbacks are driven by the [`LookupTables`] and [`ColumnMap`] handed to
//! [`Normalizer::new`].
//!
//! Numeric columns that are absent or empty read as `0`, and `0` then
//! triggers the same randomized fallback as a missing value. A literal `"0"`
//! in the input is therefore indistinguishable from no value at all.
//!
//! A row with a non-numeric value in a numeric column is skipped as a whole;
//! nothing from it is emitted and the error is returned in
//! [`Normalized::skipped`].

use crate::config::{normalize_key, ColumnMap, Config, LookupTables};
use crate::error::IngestError;
use crate::types::{
    Behavior, Dataset, GeoLocation, LoginAttemptRecord, LoginStatus, Severity, ThreatRecord,
    TrafficRecord, TrafficStatus,
};
use rand::Rng;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::str::FromStr;

/// One ingestion row: column name → raw cell text.
pub type RawRow = HashMap<String, String>;

/// Longest login description kept before truncation.
pub const DESCRIPTION_LIMIT: usize = 100;
/// Appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

const UNKNOWN_CITY: &str = "Unknown";
const DEFAULT_THREAT_DESCRIPTION: &str = "No description available";
const DEFAULT_THREAT_SOURCE: &str = "CSV Import";
const DEFAULT_PROTOCOL: &str = "TCP";
const DEFAULT_DEVICE: &str = "Unknown device";
const DEFAULT_CATEGORY: &str = "Suspicious";

/// Login rows scoring above this are eligible even without a keyword hit.
const LOGIN_SCORE_THRESHOLD: f64 = 30.0;
/// Login rows scoring above this are classified as highly suspicious.
const HIGHLY_SUSPICIOUS_SCORE: f64 = 70.0;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Result of one normalization pass.
#[derive(Debug, Default)]
pub struct Normalized {
    pub dataset: Dataset,
    /// Rows consumed, skipped ones included. Never exceeds the row limit.
    pub rows_read: usize,
    /// One error per skipped row, in input order.
    pub skipped: Vec<IngestError>,
}

impl Normalized {
    pub fn rows_skipped(&self) -> usize {
        self.skipped.len()
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Stateless row transform. Build once, call [`Normalizer::normalize`] with
/// any row source and any random generator.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tables: LookupTables,
    columns: ColumnMap,
    row_limit: usize,
    keywords: Option<Regex>,
}

impl Normalizer {
    pub fn new(
        tables: LookupTables,
        columns: ColumnMap,
        row_limit: usize,
    ) -> Result<Self, regex::Error> {
        let tables = tables.normalized();
        let keywords = if tables.login_keywords.is_empty() {
            None
        } else {
            let pattern = tables
                .login_keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Some(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
        };
        Ok(Self {
            tables,
            columns,
            row_limit,
            keywords,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, regex::Error> {
        Self::new(
            config.tables.clone(),
            config.columns.clone(),
            config.data.row_limit,
        )
    }

    /// Normalize up to `row_limit` rows. Errors in the input iterator are
    /// treated like invalid rows: counted, skipped, never fatal.
    pub fn normalize<I, R>(&self, rows: I, rng: &mut R) -> Normalized
    where
        I: IntoIterator<Item = Result<RawRow, IngestError>>,
        R: Rng + ?Sized,
    {
        let mut out = Normalized::default();

        for (index, row) in rows.into_iter().take(self.row_limit).enumerate() {
            out.rows_read += 1;
            let result =
                row.and_then(|raw| self.normalize_row(index + 1, &raw, &mut out.dataset, rng));
            if let Err(err) = result {
                tracing::debug!(error = %err, "skipping row");
                out.skipped.push(err);
            }
        }

        tracing::debug!(
            rows = out.rows_read,
            skipped = out.skipped.len(),
            threats = out.dataset.threats.len(),
            traffic = out.dataset.traffic.len(),
            logins = out.dataset.login_attempts.len(),
            "normalization pass complete"
        );
        out
    }

    /// Convenience wrapper for rows that cannot fail at the source.
    pub fn normalize_rows<I, R>(&self, rows: I, rng: &mut R) -> Normalized
    where
        I: IntoIterator<Item = RawRow>,
        R: Rng + ?Sized,
    {
        self.normalize(rows.into_iter().map(Ok), rng)
    }

    fn normalize_row<R: Rng + ?Sized>(
        &self,
        index: usize,
        raw: &RawRow,
        dataset: &mut Dataset,
        rng: &mut R,
    ) -> Result<(), IngestError> {
        let row = Row { raw, index };

        // Parse every numeric column up front so a bad row emits nothing.
        let score: f64 = row.number(&self.columns.anomaly_score)?;
        let port: u32 = row.number(&self.columns.destination_port)?;
        let packet_length: u64 = row.number(&self.columns.packet_length)?;

        let timestamp = row
            .text(&self.columns.timestamp)
            .map(str::to_string)
            .unwrap_or_else(now_timestamp);
        let location = self.resolve_location(row.text(&self.columns.location), rng);

        if let (Some(ip), Some(attack)) = (
            row.text(&self.columns.source_ip),
            row.text(&self.columns.attack_type),
        ) {
            dataset.threats.push(ThreatRecord {
                id: next_id(dataset.threats.len()),
                ip_address: ip.to_string(),
                category: self.category(attack),
                severity: self.severity(row.text(&self.columns.severity)),
                last_seen: timestamp.clone(),
                count: occurrence_count(score).unwrap_or_else(|| rng.gen_range(5..=50)),
                description: row
                    .text(&self.columns.description)
                    .unwrap_or(DEFAULT_THREAT_DESCRIPTION)
                    .to_string(),
                source: row
                    .text(&self.columns.source)
                    .unwrap_or(DEFAULT_THREAT_SOURCE)
                    .to_string(),
                location: location.clone(),
            });
        }

        if let (Some(src), Some(dst)) = (
            row.text(&self.columns.source_ip),
            row.text(&self.columns.destination_ip),
        ) {
            dataset.traffic.push(TrafficRecord {
                id: next_id(dataset.traffic.len()),
                timestamp: timestamp.clone(),
                source_ip: src.to_string(),
                destination_ip: dst.to_string(),
                protocol: row
                    .text(&self.columns.protocol)
                    .unwrap_or(DEFAULT_PROTOCOL)
                    .to_string(),
                port: if port != 0 { port } else { rng.gen_range(1..=65535) },
                bytes_transferred: match packet_length.saturating_mul(10) {
                    0 => rng.gen_range(256..=10240),
                    bytes => bytes,
                },
                packets_transferred: rng.gen_range(1..=32),
                duration: round_tenth(rng.gen_range(0.5..=10.0)),
                status: self.traffic_status(row.text(&self.columns.action_taken)),
            });
        }

        if let Some(user) = row.text(&self.columns.user_info) {
            let payload = row.text(&self.columns.payload).unwrap_or("");
            if self.login_eligible(payload, score) {
                dataset.login_attempts.push(LoginAttemptRecord {
                    id: next_id(dataset.login_attempts.len()),
                    timestamp,
                    username: user.to_string(),
                    ip_address: row
                        .text(&self.columns.source_ip)
                        .unwrap_or_default()
                        .to_string(),
                    device_info: row
                        .text(&self.columns.device_info)
                        .unwrap_or(DEFAULT_DEVICE)
                        .to_string(),
                    location: format!("{}, {}", location.city, location.country),
                    status: login_status(row.text(&self.columns.action_taken), score),
                    behavior: classify_behavior(payload, score),
                    anomaly_score: score,
                    description: truncate_description(payload),
                });
            }
        }

        Ok(())
    }

    fn severity(&self, label: Option<&str>) -> Severity {
        label
            .and_then(|s| self.tables.severity.get(&normalize_key(s)).copied())
            .unwrap_or(Severity::Low)
    }

    fn category(&self, attack: &str) -> String {
        self.tables
            .category
            .get(&normalize_key(attack))
            .cloned()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }

    /// City is the text before the first comma. Unknown cities get a random
    /// position inside the fallback box.
    fn resolve_location<R: Rng + ?Sized>(
        &self,
        location: Option<&str>,
        rng: &mut R,
    ) -> GeoLocation {
        let city = location
            .and_then(|l| l.split(',').next())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_CITY)
            .to_string();

        match self.tables.gazetteer.get(&normalize_key(&city)) {
            Some(point) => GeoLocation {
                lat: point.lat,
                lng: point.lng,
                country: point.country.clone(),
                city,
            },
            None => GeoLocation {
                lat: rng.gen_range(10.0..=40.0),
                lng: rng.gen_range(70.0..=90.0),
                country: self.tables.fallback_country.clone(),
                city,
            },
        }
    }

    fn traffic_status(&self, action: Option<&str>) -> TrafficStatus {
        action
            .and_then(|a| self.tables.traffic_status.get(&normalize_key(a)).copied())
            .unwrap_or(TrafficStatus::Allowed)
    }

    fn login_eligible(&self, payload: &str, score: f64) -> bool {
        let keyword_hit = self
            .keywords
            .as_ref()
            .is_some_and(|re| re.is_match(payload));
        keyword_hit || score > LOGIN_SCORE_THRESHOLD
    }
}

// ---------------------------------------------------------------------------
// Row access
// ---------------------------------------------------------------------------

struct Row<'a> {
    raw: &'a RawRow,
    index: usize,
}

impl<'a> Row<'a> {
    /// Trimmed cell text; `None` when the column is absent or blank.
    fn text(&self, column: &str) -> Option<&'a str> {
        self.raw
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Numeric cell; absent or blank reads as zero.
    fn number<T>(&self, column: &str) -> Result<T, IngestError>
    where
        T: FromStr + Default + Finite,
    {
        let Some(text) = self.text(column) else {
            return Ok(T::default());
        };
        text.parse::<T>()
            .ok()
            .filter(Finite::is_finite)
            .ok_or_else(|| IngestError::InvalidNumber {
                row: self.index,
                column: column.to_string(),
                value: text.to_string(),
            })
    }
}

/// Rejects NaN and infinities, which `f64::from_str` happily accepts.
trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Finite for u32 {
    fn is_finite(&self) -> bool {
        true
    }
}

impl Finite for u64 {
    fn is_finite(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

fn next_id(len: usize) -> String {
    (len + 1).to_string()
}

fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `floor(2 × score)` when that is a positive count, `None` otherwise.
pub fn occurrence_count(score: f64) -> Option<u64> {
    let doubled = (score * 2.0).floor();
    (doubled >= 1.0).then_some(doubled as u64)
}

/// `Blocked` wins outright; `Logged` with a low score is a success; all
/// other combinations failed.
pub fn login_status(action: Option<&str>, score: f64) -> LoginStatus {
    match action.map(normalize_key).as_deref() {
        Some("blocked") => LoginStatus::Blocked,
        Some("logged") if score < LOGIN_SCORE_THRESHOLD => LoginStatus::Successful,
        _ => LoginStatus::Failed,
    }
}

/// First matching rule wins.
pub fn classify_behavior(payload: &str, score: f64) -> Behavior {
    let payload = payload.to_lowercase();
    if payload.contains("authentication") {
        Behavior::AuthenticationAttempt
    } else if score > HIGHLY_SUSPICIOUS_SCORE {
        Behavior::HighlySuspicious
    } else if payload.contains("unusual") {
        Behavior::Unusual
    } else {
        Behavior::SuspiciousLogin
    }
}

/// Keep the first [`DESCRIPTION_LIMIT`] characters, marking the cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
