//! CSV ingestion into the record model.
//!
//! The source is a delimited file with a header row; any subset of the
//! expected columns may be present. Headers are trimmed, BOM-stripped and
//! inner whitespace is collapsed so that `"Name  1 "` and `"Name 1"` name
//! the same column. Blank cells load as the missing sentinel.

use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::info;

use sanctions_model::{CellValue, Dataset, Record};

/// Fatal ingestion failure: the source is unreadable or not tabular.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read source {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("source {0} has no header row")]
    NoHeader(String),
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::from_raw(raw.trim_matches('\u{feff}'))
}

/// Load a CSV file into a [`Dataset`].
///
/// The whole file is read before returning; the handle is released on every
/// exit path. Rows whose cells are all blank are skipped.
pub fn read_dataset(path: &Path) -> Result<Dataset, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| to_ingest_error(path, error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| to_ingest_error(path, error))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(|name| name.is_empty()) {
        return Err(IngestError::NoHeader(path.display().to_string()));
    }

    let mut dataset = Dataset::new(headers.clone());
    for result in reader.records() {
        let record = result.map_err(|error| to_ingest_error(path, error))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Record::new();
        for (idx, name) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            row.insert(name.clone(), normalize_cell(value));
        }
        dataset.push_row(row);
    }

    info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns.len(),
        "loaded source data"
    );
    Ok(dataset)
}

fn to_ingest_error(path: &Path, error: csv::Error) -> IngestError {
    IngestError::Read {
        path: path.display().to_string(),
        source: error,
    }
}
