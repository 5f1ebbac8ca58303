//! Ingestion — reads a CSV file and runs it through the [`Normalizer`].
//!
//! [`ingest_csv`] reports one of three outcomes instead of failing: the file
//! parsed cleanly, it parsed with some rows skipped, or it was unusable.
//! [`load_dataset`] turns an unusable source into the built-in sample so the
//! dashboard always has something to serve.

use crate::config::Config;
use crate::error::IngestError;
use crate::normalizer::{Normalizer, RawRow};
use crate::sample::sample_dataset;
use crate::types::{DataOrigin, Dataset};
use rand::Rng;
use std::fs::File;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Row reader
// ---------------------------------------------------------------------------

/// Iterator over the data rows of a CSV file, keyed by header name.
///
/// Rows with the wrong number of fields or invalid UTF-8 are yielded as
/// [`IngestError::Row`] and do not end the iteration.
pub struct RowReader {
    records: csv::DeserializeRecordsIntoIter<File, RawRow>,
    next_row: usize,
}

impl Iterator for RowReader {
    type Item = Result<RawRow, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.next_row += 1;
        let row = self.next_row;
        Some(record.map_err(|source| IngestError::Row { row, source }))
    }
}

/// Open `path` and read its header row.
pub fn read_rows(path: &Path) -> Result<RowReader, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reader.headers().map_err(|source| IngestError::Header {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RowReader {
        records: reader.into_deserialize(),
        next_row: 0,
    })
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What came out of one CSV ingestion.
#[derive(Debug)]
pub enum IngestOutcome {
    /// Every consumed row was usable.
    Parsed { dataset: Dataset, rows_read: usize },
    /// Some consumed rows were skipped; the rest were normalized.
    ParsedWithSkips {
        dataset: Dataset,
        rows_read: usize,
        skipped: Vec<IngestError>,
    },
    /// Nothing usable could be read.
    Unreadable(IngestError),
}

/// Read and normalize `path`.
pub fn ingest_csv<R: Rng + ?Sized>(
    path: &Path,
    normalizer: &Normalizer,
    rng: &mut R,
) -> IngestOutcome {
    let rows = match read_rows(path) {
        Ok(rows) => rows,
        Err(err) => return IngestOutcome::Unreadable(err),
    };

    let out = normalizer.normalize(rows, rng);

    if out.rows_read == 0 {
        return IngestOutcome::Unreadable(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    if out.skipped.len() == out.rows_read {
        return IngestOutcome::Unreadable(IngestError::NoValidRows {
            path: path.to_path_buf(),
            skipped: out.rows_read,
        });
    }
    if out.skipped.is_empty() {
        IngestOutcome::Parsed {
            dataset: out.dataset,
            rows_read: out.rows_read,
        }
    } else {
        IngestOutcome::ParsedWithSkips {
            dataset: out.dataset,
            rows_read: out.rows_read,
            skipped: out.skipped,
        }
    }
}

// ---------------------------------------------------------------------------
// Startup loading
// ---------------------------------------------------------------------------

/// Build the startup dataset: the configured CSV when it yields rows,
/// the built-in sample otherwise. Never fails.
pub fn load_dataset<R: Rng + ?Sized>(
    config: &Config,
    normalizer: &Normalizer,
    rng: &mut R,
) -> (Dataset, DataOrigin) {
    let Some(path) = config.data.input_csv.as_deref() else {
        tracing::info!("no input CSV configured, using built-in sample data");
        return (sample_dataset(), DataOrigin::Sample);
    };

    match ingest_csv(path, normalizer, rng) {
        IngestOutcome::Parsed { dataset, rows_read } => {
            tracing::info!(path = %path.display(), rows = rows_read, "loaded CSV input");
            (dataset, csv_origin(path, rows_read, 0))
        }
        IngestOutcome::ParsedWithSkips {
            dataset,
            rows_read,
            skipped,
        } => {
            tracing::warn!(
                path = %path.display(),
                rows = rows_read,
                skipped = skipped.len(),
                first_error = %skipped[0],
                "loaded CSV input with skipped rows"
            );
            let skipped = skipped.len();
            (dataset, csv_origin(path, rows_read, skipped))
        }
        IngestOutcome::Unreadable(err) if err.is_missing_source() => {
            tracing::info!(path = %path.display(), "input CSV not found, using built-in sample data");
            (sample_dataset(), DataOrigin::Sample)
        }
        IngestOutcome::Unreadable(err) => {
            tracing::warn!(error = %err, "input CSV unusable, using built-in sample data");
            (sample_dataset(), DataOrigin::Sample)
        }
    }
}

fn csv_origin(path: &Path, rows_read: usize, rows_skipped: usize) -> DataOrigin {
    DataOrigin::Csv {
        path: PathBuf::from(path),
        rows_read,
        rows_skipped,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
