//! End-to-end tests over the batch pipeline.

use std::path::PathBuf;

use sanctions_cli::pipeline::run_pipeline;
use sanctions_transform::NormalizeConfig;

fn write_input(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.csv");
    std::fs::write(&path, contents).expect("write input");
    path
}

#[test]
fn duplicate_rows_are_dropped_before_normalization() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_input(
        &dir,
        "Name 1,Name 2,DOB,Nationality,Address 1,Address 3\n\
         John,Doe,00/05/1970,(1) France (2) France (3) Spain,12 Main St,Flat 4\n\
         John,Doe,00/05/1970,(1) France (2) France (3) Spain,12 Main St,Flat 4\n\
         Jane,Smith,12-00-1999,Germany,,\n",
    );
    let output = dir.path().join("output.csv");

    let result = run_pipeline(&input, Some(&output), &NormalizeConfig::default())
        .expect("run pipeline");

    assert_eq!(result.rows_read, 3);
    assert_eq!(result.duplicates_removed, 1);
    assert_eq!(result.rows_written, 2);
    // Duplicate count describes the projected set, after deduplication.
    assert_eq!(result.report.duplicate_rows, 0);
    assert_eq!(result.report.invalid_dob, Some(0));

    let contents = std::fs::read_to_string(&output).expect("read output");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Full Name,DOB,Associated Countries,Full Address")
    );
    assert_eq!(
        lines.next(),
        Some("John Doe,01-05-1970,\"France, Spain\",\"12 Main St, Flat 4\"")
    );
    assert_eq!(lines.next(), Some("Jane Smith,12-01-1999,Germany,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn missing_columns_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_input(&dir, "Name 1\nJohn\nJane\n");
    let output = dir.path().join("output.csv");

    let result = run_pipeline(&input, Some(&output), &NormalizeConfig::default())
        .expect("run pipeline");

    assert_eq!(result.rows_written, 2);
    assert!(result.missing_columns.contains(&"DOB".to_string()));
    assert!(result.missing_columns.contains(&"Town of Birth".to_string()));
    assert!(!result.missing_columns.contains(&"Full Name".to_string()));
    // No DOB column in the projected set, so no invalid-DOB finding.
    assert_eq!(result.report.invalid_dob, None);
}

#[test]
fn dry_run_skips_the_write() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_input(&dir, "Name 1,DOB\nJohn,bad-date\n");

    let result =
        run_pipeline(&input, None, &NormalizeConfig::default()).expect("run pipeline");

    assert_eq!(result.rows_read, 1);
    assert_eq!(result.rows_written, 0);
    // Malformed DOB degraded to missing, which counts as invalid.
    assert_eq!(result.report.invalid_dob, Some(1));
    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn unreadable_input_is_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.csv");
    let result = run_pipeline(&missing, None, &NormalizeConfig::default());
    assert!(result.is_err());
}
