//! Test builders — ergonomic constructors for ingestion rows and normalizers.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fake::faker::internet::en::IPv4;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;
use threatboard::config::Config;
use threatboard::{Normalizer, RawRow};

use super::fixtures::*;

// ---------------------------------------------------------------------------
// RowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRow`] fixtures using the default CSV headers.
///
/// # Example
///
/// ```rust
/// let row = RowBuilder::new()
///     .source_ip("10.1.1.1")
///     .attack_type("Malware")
///     .severity("High")
///     .score("20")
///     .build();
/// ```
#[derive(Default)]
pub struct RowBuilder {
    row: RawRow,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col(mut self, column: &str, value: impl Into<String>) -> Self {
        self.row.insert(column.to_string(), value.into());
        self
    }

    pub fn timestamp(self, v: &str) -> Self {
        self.col(COL_TIMESTAMP, v)
    }

    pub fn source_ip(self, v: &str) -> Self {
        self.col(COL_SOURCE_IP, v)
    }

    pub fn destination_ip(self, v: &str) -> Self {
        self.col(COL_DESTINATION_IP, v)
    }

    pub fn port(self, v: &str) -> Self {
        self.col(COL_DESTINATION_PORT, v)
    }

    pub fn packet_length(self, v: &str) -> Self {
        self.col(COL_PACKET_LENGTH, v)
    }

    pub fn payload(self, v: &str) -> Self {
        self.col(COL_PAYLOAD, v)
    }

    pub fn score(self, v: &str) -> Self {
        self.col(COL_ANOMALY_SCORE, v)
    }

    pub fn attack_type(self, v: &str) -> Self {
        self.col(COL_ATTACK_TYPE, v)
    }

    pub fn action(self, v: &str) -> Self {
        self.col(COL_ACTION_TAKEN, v)
    }

    pub fn severity(self, v: &str) -> Self {
        self.col(COL_SEVERITY, v)
    }

    pub fn user(self, v: &str) -> Self {
        self.col(COL_USER_INFO, v)
    }

    pub fn location(self, v: &str) -> Self {
        self.col(COL_LOCATION, v)
    }

    pub fn build(self) -> RawRow {
        self.row
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A row eligible for a threat only.
pub fn threat_row(ip: &str, attack: &str) -> RawRow {
    RowBuilder::new().source_ip(ip).attack_type(attack).build()
}

/// A row eligible for a traffic record only.
pub fn traffic_row(src: &str, dst: &str) -> RawRow {
    RowBuilder::new().source_ip(src).destination_ip(dst).build()
}

/// A row eligible for a login attempt only (keyword trigger).
pub fn login_row(user: &str, payload: &str) -> RawRow {
    RowBuilder::new().user(user).payload(payload).build()
}

/// A row eligible for all three record kinds, with fake IPs and user name.
pub fn full_row() -> RawRow {
    let src: String = IPv4().fake();
    let dst: String = IPv4().fake();
    let user: String = Name().fake();
    RowBuilder::new()
        .timestamp("2023-05-30 06:33:58")
        .source_ip(&src)
        .destination_ip(&dst)
        .attack_type("Intrusion")
        .severity("Medium")
        .user(&user)
        .payload("unusual login from new device")
        .score("42.5")
        .build()
}

/// `n` rows, each eligible for all three record kinds.
pub fn build_rows(n: usize) -> Vec<RawRow> {
    (0..n).map(|_| full_row()).collect()
}

// ---------------------------------------------------------------------------
// Normalizer helpers
// ---------------------------------------------------------------------------

pub fn normalizer() -> Normalizer {
    Normalizer::from_config(&Config::defaults()).expect("default keywords compile")
}

pub fn normalizer_with_limit(limit: usize) -> Normalizer {
    let config = Config::defaults();
    Normalizer::new(config.tables, config.columns, limit).expect("default keywords compile")
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
