//! Error types for the ingestion and snapshot layers.

use std::path::PathBuf;

/// Errors raised while reading or normalizing CSV input.
///
/// Source-level variants make the whole input unusable; [`IngestError::Row`]
/// and [`IngestError::InvalidNumber`] are per-row and only cause that row to
/// be skipped.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read CSV header of {}: {source}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} contains no data rows", .path.display())]
    Empty { path: PathBuf },

    #[error("all {skipped} rows read from {} were invalid", .path.display())]
    NoValidRows { path: PathBuf, skipped: usize },

    #[error("malformed row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: column {column:?} is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl IngestError {
    /// True when the input file simply does not exist.
    pub fn is_missing_source(&self) -> bool {
        match self {
            IngestError::Open { source, .. } => matches!(
                source.kind(),
                csv::ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::NotFound
            ),
            _ => false,
        }
    }
}

/// Errors raised while persisting or reloading snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot create data directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write snapshot {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
