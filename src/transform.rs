//! Offline cleaning pipeline: raw CSV export to JSON artifact.
//!
//! This is the only part of the system with real logic. Each raw row is
//! repaired in place (missing metadata filled, dates parsed, categories
//! split) and the whole batch is written out as one JSON array. Row-level
//! anomalies never abort the run; only a wholesale read or write failure
//! does, in which case no output is written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::models::{CleanedRecord, RawRecord};

/// Placeholder for missing string metadata.
pub const UNKNOWN: &str = "Unknown";

/// Date layouts observed across revisions of the raw export, tried in
/// order. The export's native form is "September 25, 2021".
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y"];

/// Fatal transform failures. Row-level anomalies are repaired, not raised.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("failed to read raw data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write artifact to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize cleaned records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parse an added-date string from the raw export.
///
/// Surrounding whitespace is trimmed first. Returns `None` for empty or
/// unparseable input; never errors.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Substitute the `"Unknown"` placeholder for missing or empty metadata.
fn fill_unknown(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN.to_string(),
    }
}

/// Split the comma-separated category field into an ordered list.
///
/// Splitting an empty or absent field yields `[""]`, a single empty
/// element rather than an empty list. Known quirk: downstream consumers
/// expect every record to have at least one category slot, so it is kept
/// as-is.
pub fn split_categories(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("")
        .split(", ")
        .map(str::to_string)
        .collect()
}

/// Apply the field-cleaning rules to one raw row. Deterministic and
/// independent per row.
pub fn clean_record(raw: RawRecord) -> CleanedRecord {
    let date_added = raw.date_added.as_deref().and_then(parse_date_added);
    let (year_added, month_added, day_added) = match date_added {
        Some(d) => (
            d.year(),
            d.format("%B").to_string(),
            d.format("%A").to_string(),
        ),
        None => (0, UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    CleanedRecord {
        show_id: raw.show_id,
        record_type: raw.record_type,
        title: raw.title,
        director: fill_unknown(raw.director),
        cast: fill_unknown(raw.cast),
        country: fill_unknown(raw.country),
        date_added,
        release_year: raw.release_year,
        rating: raw.rating,
        duration: raw.duration,
        listed_in: split_categories(raw.listed_in.as_deref()),
        description: raw.description,
        year_added,
        month_added,
        day_added,
    }
}

/// Run the full transform: read the raw CSV, clean every row, write the
/// artifact. Returns the number of records written.
///
/// Input row order is preserved in the output. A missing or malformed
/// input file aborts with [`TransformError::Read`] before anything is
/// written.
pub fn run(raw_path: &Path, artifact_path: &Path) -> Result<usize, TransformError> {
    let read_err = |source| TransformError::Read {
        path: raw_path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(raw_path).map_err(read_err)?;

    let mut cleaned = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        let raw = row.map_err(read_err)?;
        cleaned.push(clean_record(raw));
    }
    info!(rows = cleaned.len(), "cleaned raw records");

    write_artifact(&cleaned, artifact_path)?;
    info!(path = %artifact_path.display(), "artifact written");

    Ok(cleaned.len())
}

/// Serialize the batch and move it into place.
///
/// Intermediate directories are created as needed. The file is written to
/// a sibling `.tmp` path and renamed, so a reader polling the artifact
/// never observes a truncated document.
fn write_artifact(records: &[CleanedRecord], path: &Path) -> Result<(), TransformError> {
    let write_err = |source| TransformError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let json = serde_json::to_vec_pretty(records)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;

    Ok(())
}
