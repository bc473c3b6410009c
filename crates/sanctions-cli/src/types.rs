use std::path::PathBuf;

use sanctions_report::QualityReport;

/// Outcome of one batch run, consumed by the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    pub duplicates_removed: usize,
    pub rows_written: usize,
    pub projected_columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub report: QualityReport,
}
