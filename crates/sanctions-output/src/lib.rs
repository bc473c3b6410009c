//! CSV egress for the projected record set.
//!
//! The header is the projected column list; rows are written in pipeline
//! order. The missing sentinel and the empty string both serialize as an
//! empty field — a flat file cannot carry the distinction.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use sanctions_model::Dataset;

/// Fatal egress failure: destination unwritable or the write failed.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("write output {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("flush output {path}: {source}")]
    Flush {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn write_error(path: &Path, source: csv::Error) -> OutputError {
    OutputError::Write {
        path: path.display().to_string(),
        source,
    }
}

/// Serialize the dataset to a CSV file, header first.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| write_error(path, error))?;

    writer
        .write_record(&dataset.columns)
        .map_err(|error| write_error(path, error))?;
    for row in &dataset.rows {
        let fields: Vec<&str> = dataset
            .columns
            .iter()
            .map(|column| row.text(column).unwrap_or(""))
            .collect();
        writer
            .write_record(&fields)
            .map_err(|error| write_error(path, error))?;
    }
    writer.flush().map_err(|error| OutputError::Flush {
        path: path.display().to_string(),
        source: error,
    })?;

    info!(
        path = %path.display(),
        rows = dataset.len(),
        "wrote canonical record set"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use sanctions_model::{CellValue, Record};

    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.csv");

        let mut dataset = Dataset::new(vec!["Full Name".to_string(), "DOB".to_string()]);
        let mut row = Record::new();
        row.insert("Full Name", CellValue::Text("John Doe".to_string()));
        row.insert("DOB", CellValue::Missing);
        dataset.push_row(row);

        write_dataset(&dataset, &path).expect("write dataset");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "Full Name,DOB\nJohn Doe,\n");
    }

    #[test]
    fn unwritable_destination_is_fatal() {
        let dataset = Dataset::new(vec!["Full Name".to_string()]);
        let result = write_dataset(&dataset, Path::new("/nonexistent/dir/out.csv"));
        assert!(matches!(result, Err(OutputError::Write { .. })));
    }
}
