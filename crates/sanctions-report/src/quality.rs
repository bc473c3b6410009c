//! Data-quality assessment.
//!
//! Runs last, as a read-only snapshot over the final projected dataset.
//! Findings are advisory telemetry for the caller and never gate the run.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use sanctions_model::{CanonicalColumn, Dataset};

/// Shape every normalized DOB must have.
static DOB_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("valid DOB pattern"));

/// Advisory quality snapshot of the projected record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Missing-value count per column, projected column order,
    /// zero-count columns omitted.
    pub missing_values: Vec<(String, usize)>,
    /// Duplicate rows over the projected set. Deduplication already ran on
    /// the raw rows, so anything non-zero means projection collapsed
    /// distinguishing fields.
    pub duplicate_rows: usize,
    /// Records whose DOB fails the `DD-MM-YYYY` shape, missing sentinel
    /// included. `None` when the projected set has no DOB column.
    pub invalid_dob: Option<usize>,
}

impl QualityReport {
    /// Render the report as an ordered list of human-readable findings.
    pub fn findings(&self) -> Vec<String> {
        let mut findings = Vec::new();
        if !self.missing_values.is_empty() {
            let mut text = String::from("Missing values:");
            for (column, count) in &self.missing_values {
                text.push_str(&format!("\n  {column}: {count}"));
            }
            findings.push(text);
        }
        findings.push(format!("Duplicate records: {}", self.duplicate_rows));
        if let Some(count) = self.invalid_dob {
            findings.push(format!("Invalid DOB format: {count} records"));
        }
        findings
    }
}

/// Compute the quality report over the final projected dataset.
pub fn assess_quality(dataset: &Dataset) -> QualityReport {
    let missing_values = dataset
        .columns
        .iter()
        .filter_map(|column| {
            let count = dataset
                .rows
                .iter()
                .filter(|row| row.cell(column).is_none_or(|cell| cell.is_missing()))
                .count();
            (count > 0).then(|| (column.clone(), count))
        })
        .collect();

    let mut seen = HashSet::with_capacity(dataset.rows.len());
    let duplicate_rows = dataset
        .rows
        .iter()
        .filter(|row| !seen.insert((*row).clone()))
        .count();

    let dob_label = CanonicalColumn::Dob.label();
    let invalid_dob = dataset.has_column(dob_label).then(|| {
        dataset
            .rows
            .iter()
            .filter(|row| {
                row.text(dob_label)
                    .is_none_or(|value| !DOB_SHAPE.is_match(value))
            })
            .count()
    });

    QualityReport {
        missing_values,
        duplicate_rows,
        invalid_dob,
    }
}
