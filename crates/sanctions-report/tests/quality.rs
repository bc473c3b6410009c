//! Tests for the quality assessor.

use sanctions_model::{CellValue, Dataset, Record};
use sanctions_report::assess_quality;

fn dataset(columns: &[&str], rows: &[&[(&str, &str)]]) -> Dataset {
    let mut dataset = Dataset::new(columns.iter().map(|name| (*name).to_string()).collect());
    for cells in rows {
        let mut record = Record::new();
        for name in columns {
            record.insert(*name, CellValue::Missing);
        }
        for (column, value) in *cells {
            record.insert(*column, CellValue::from_raw(value));
        }
        dataset.push_row(record);
    }
    dataset
}

#[test]
fn missing_counts_omit_complete_columns() {
    let data = dataset(
        &["Full Name", "Position"],
        &[
            &[("Full Name", "A"), ("Position", "Minister")],
            &[("Full Name", "B")],
        ],
    );
    let report = assess_quality(&data);
    assert_eq!(report.missing_values, vec![("Position".to_string(), 1)]);
}

#[test]
fn duplicate_rows_counted_after_first_occurrence() {
    let data = dataset(
        &["Full Name"],
        &[&[("Full Name", "A")], &[("Full Name", "A")], &[("Full Name", "A")]],
    );
    let report = assess_quality(&data);
    assert_eq!(report.duplicate_rows, 2);
}

#[test]
fn invalid_dob_counts_missing_sentinel() {
    let data = dataset(
        &["DOB"],
        &[&[("DOB", "01-05-1970")], &[("DOB", "1970-05-01")], &[]],
    );
    let report = assess_quality(&data);
    // One wrong shape plus one missing sentinel.
    assert_eq!(report.invalid_dob, Some(2));
}

#[test]
fn invalid_dob_absent_without_dob_column() {
    let data = dataset(&["Full Name"], &[&[("Full Name", "A")]]);
    let report = assess_quality(&data);
    assert_eq!(report.invalid_dob, None);
}

#[test]
fn findings_are_ordered_and_human_readable() {
    let data = dataset(
        &["Full Name", "DOB"],
        &[&[("Full Name", "A"), ("DOB", "01-05-1970")], &[("Full Name", "A")]],
    );
    let report = assess_quality(&data);
    let findings = report.findings();
    assert!(findings[0].starts_with("Missing values:"));
    assert!(findings[0].contains("DOB: 1"));
    assert_eq!(findings[1], "Duplicate records: 0");
    assert_eq!(findings[2], "Invalid DOB format: 1 records");
}

#[test]
fn empty_dataset_reports_cleanly() {
    let data = dataset(&["Full Name"], &[]);
    let report = assess_quality(&data);
    assert!(report.missing_values.is_empty());
    assert_eq!(report.duplicate_rows, 0);
    let findings = report.findings();
    assert_eq!(findings, vec!["Duplicate records: 0".to_string()]);
}
