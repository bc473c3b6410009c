//! Batch pipeline orchestration.
//!
//! A strict, acyclic sequence: ingest → dedupe → normalize → project →
//! assess → write. Dedup needs the complete row set, so it is the
//! synchronization barrier between ingestion and the per-record stages.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sanctions_ingest::read_dataset;
use sanctions_output::write_dataset;
use sanctions_report::assess_quality;
use sanctions_transform::{
    NormalizeConfig, dedupe_records, normalize_dataset, project_canonical,
};

use crate::types::RunResult;

/// Run one batch over explicit input and output locations.
///
/// `output` of `None` performs every stage except the final write
/// (dry run). Quality findings never fail the run; only ingest and
/// egress errors do.
pub fn run_pipeline(
    input: &Path,
    output: Option<&Path>,
    config: &NormalizeConfig,
) -> Result<RunResult> {
    let raw = {
        let span = info_span!("ingest");
        let _guard = span.enter();
        read_dataset(input).context("load source data")?
    };
    let rows_read = raw.len();

    let deduped = {
        let span = info_span!("dedupe");
        let _guard = span.enter();
        dedupe_records(raw)
    };
    let duplicates_removed = rows_read - deduped.len();

    let normalized = {
        let span = info_span!("normalize");
        let _guard = span.enter();
        normalize_dataset(deduped, config)
    };

    let projection = {
        let span = info_span!("project");
        let _guard = span.enter();
        project_canonical(&normalized)
    };

    let report = {
        let span = info_span!("assess");
        let _guard = span.enter();
        assess_quality(&projection.dataset)
    };

    let rows_written = if let Some(path) = output {
        let span = info_span!("output");
        let _guard = span.enter();
        write_dataset(&projection.dataset, path).context("write canonical data")?;
        projection.dataset.len()
    } else {
        info!("dry run, skipping output write");
        0
    };

    Ok(RunResult {
        input: input.to_path_buf(),
        output: output.map(Path::to_path_buf),
        rows_read,
        duplicates_removed,
        rows_written,
        projected_columns: projection.dataset.columns.clone(),
        missing_columns: projection.missing_columns,
        report,
    })
}
