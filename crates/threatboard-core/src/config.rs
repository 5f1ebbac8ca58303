//! Configuration types for threatboard.
//!
//! [`Config::load`] layers the embedded defaults, an optional TOML file and
//! `THREATBOARD__*` environment variables, in that order. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem (useful in
//! tests).
//!
//! The normalizer's lookup tables live here too, so mappings and the
//! gazetteer can be extended from `threatboard.toml` without code changes.

use crate::types::{Severity, TrafficStatus};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host       = "0.0.0.0"
port       = 5000
static_dir = "static"

[data]
data_dir  = "data"
row_limit = 50

[columns]
timestamp        = "Timestamp"
source_ip        = "Source IP Address"
destination_ip   = "Destination IP Address"
destination_port = "Destination Port"
protocol         = "Protocol"
packet_length    = "Packet Length"
payload          = "Payload Data"
anomaly_score    = "Anomaly Scores"
attack_type      = "Attack Type"
action_taken     = "Action Taken"
severity         = "Severity Level"
user_info        = "User Information"
device_info      = "Device Information"
location         = "Geo-location Data"
description      = "Alerts/Warnings"
source           = "Log Source"

[tables]
fallback_country = "India"
login_keywords   = ["authentication", "login", "access", "authorization", "suspicious", "unusual"]

[tables.severity]
low      = "Low"
medium   = "Medium"
high     = "High"
critical = "High"

[tables.category]
malware      = "Malicious"
ddos         = "Malicious"
intrusion    = "Scanning"
exfiltration = "Data Exfiltration"

[tables.traffic_status]
blocked = "Blocked"
logged  = "Flagged"
ignored = "Allowed"

[tables.gazetteer]
"new delhi" = { lat = 28.6139, lng = 77.2090, country = "India" }
"mumbai"    = { lat = 19.0760, lng = 72.8777, country = "India" }
"bangalore" = { lat = 12.9716, lng = 77.5946, country = "India" }
"kolkata"   = { lat = 22.5726, lng = 88.3639, country = "India" }
"chennai"   = { lat = 13.0827, lng = 80.2707, country = "India" }
"hyderabad" = { lat = 17.3850, lng = 78.4867, country = "India" }
"pune"      = { lat = 18.5204, lng = 73.8567, country = "India" }
"jaipur"    = { lat = 26.9124, lng = 75.7873, country = "India" }
"london"        = { lat = 51.5074, lng = -0.1278,   country = "United Kingdom" }
"new york"      = { lat = 40.7128, lng = -74.0060,  country = "United States" }
"san francisco" = { lat = 37.7749, lng = -122.4194, country = "United States" }
"tokyo"         = { lat = 35.6762, lng = 139.6503,  country = "Japan" }
"moscow"        = { lat = 55.7558, lng = 37.6173,   country = "Russia" }
"#;

/// Default file looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "threatboard.toml";

/// Prefix of environment variables that override config keys.
pub const ENV_PREFIX: &str = "THREATBOARD";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub columns: ColumnMap,
    pub tables: LookupTables,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Served under `/static`.
    pub static_dir: PathBuf,
}

/// `[data]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Snapshot files are written here on every start.
    pub data_dir: PathBuf,
    /// CSV to normalize. When unset or unreadable the built-in sample is used.
    #[serde(default)]
    pub input_csv: Option<PathBuf>,
    /// Hard cap on rows consumed from `input_csv`.
    pub row_limit: usize,
}

/// `[columns]` section: CSV header names the normalizer reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMap {
    pub timestamp: String,
    pub source_ip: String,
    pub destination_ip: String,
    pub destination_port: String,
    pub protocol: String,
    pub packet_length: String,
    pub payload: String,
    pub anomaly_score: String,
    pub attack_type: String,
    pub action_taken: String,
    pub severity: String,
    pub user_info: String,
    pub device_info: String,
    pub location: String,
    pub description: String,
    pub source: String,
}

/// `[tables]` section: fixed mappings used during normalization.
///
/// Keys are matched case-insensitively; see [`LookupTables::normalized`].
#[derive(Debug, Clone, Deserialize)]
pub struct LookupTables {
    /// Country reported when a city is missing from the gazetteer.
    pub fallback_country: String,
    pub login_keywords: Vec<String>,
    /// Input severity label → severity.
    pub severity: HashMap<String, Severity>,
    /// Input attack type → threat category.
    pub category: HashMap<String, String>,
    /// Input action taken → traffic status.
    pub traffic_status: HashMap<String, TrafficStatus>,
    /// City name → coordinates.
    pub gazetteer: HashMap<String, GeoPoint>,
}

/// A gazetteer entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub country: String,
}

impl LookupTables {
    /// Lowercase and trim every key so lookups can be done on normalized input.
    pub fn normalized(self) -> Self {
        fn keys<V>(map: HashMap<String, V>) -> HashMap<String, V> {
            map.into_iter()
                .map(|(k, v)| (normalize_key(&k), v))
                .collect()
        }
        Self {
            fallback_country: self.fallback_country,
            login_keywords: self
                .login_keywords
                .into_iter()
                .map(|k| normalize_key(&k))
                .filter(|k| !k.is_empty())
                .collect(),
            severity: keys(self.severity),
            category: keys(self.category),
            traffic_status: keys(self.traffic_status),
            gazetteer: keys(self.gazetteer),
        }
    }
}

/// Canonical form used for every table key and lookup.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// An explicit `path` must exist; otherwise [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_layered(path, environment())
    }

    fn load_layered(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// `host:port` the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `THREATBOARD__SECTION__KEY` variables, e.g. `THREATBOARD__SERVER__PORT`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
