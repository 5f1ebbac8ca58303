//! Store — the immutable, in-memory snapshot of all three collections.
//!
//! A [`Snapshot`] is built once at startup, persisted with
//! [`Snapshot::persist`], and then shared read-only with the HTTP layer. No
//! operation mutates it after construction.

use crate::error::StoreError;
use crate::types::{DataOrigin, Dataset, LoginAttemptRecord, ThreatRecord, TrafficRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const THREATS_FILE: &str = "ip_threats.json";
pub const TRAFFIC_FILE: &str = "traffic_analysis.json";
pub const LOGIN_ATTEMPTS_FILE: &str = "login_attempts.json";

/// The three collections plus where they came from.
#[derive(Debug, Clone)]
pub struct Snapshot {
    dataset: Dataset,
    origin: DataOrigin,
    built_at: chrono::DateTime<chrono::Utc>,
}

/// Paths written by [`Snapshot::persist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFiles {
    pub threats: PathBuf,
    pub traffic: PathBuf,
    pub login_attempts: PathBuf,
}

impl SnapshotFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            threats: dir.join(THREATS_FILE),
            traffic: dir.join(TRAFFIC_FILE),
            login_attempts: dir.join(LOGIN_ATTEMPTS_FILE),
        }
    }
}

impl Snapshot {
    pub fn new(dataset: Dataset, origin: DataOrigin) -> Self {
        Self {
            dataset,
            origin,
            built_at: chrono::Utc::now(),
        }
    }

    pub fn threats(&self) -> &[ThreatRecord] {
        &self.dataset.threats
    }

    pub fn traffic(&self) -> &[TrafficRecord] {
        &self.dataset.traffic
    }

    pub fn login_attempts(&self) -> &[LoginAttemptRecord] {
        &self.dataset.login_attempts
    }

    /// Linear scan; the first threat with a matching id wins.
    pub fn threat(&self, id: &str) -> Option<&ThreatRecord> {
        self.dataset.threats.iter().find(|t| t.id == id)
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.origin
    }

    pub fn built_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.built_at
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Write every collection to `dir`, replacing any previous snapshot.
    /// Creates `dir` if needed.
    pub fn persist(&self, dir: &Path) -> Result<SnapshotFiles, StoreError> {
        std::fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let files = SnapshotFiles::in_dir(dir);
        write_collection(&files.threats, self.threats())?;
        write_collection(&files.traffic, self.traffic())?;
        write_collection(&files.login_attempts, self.login_attempts())?;

        tracing::info!(
            dir = %dir.display(),
            threats = self.threats().len(),
            traffic = self.traffic().len(),
            logins = self.login_attempts().len(),
            "snapshot persisted"
        );
        Ok(files)
    }
}

/// Serialize `records` as a JSON array with 2-space indentation.
pub fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    writer.flush().map_err(write_err)
}

/// Read a collection written by [`write_collection`].
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
