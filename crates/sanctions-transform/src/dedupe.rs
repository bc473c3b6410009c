use std::collections::HashSet;

use tracing::debug;

use sanctions_model::Dataset;

/// Remove exact full-row duplicates, keeping each group's first occurrence.
///
/// Rows are equal only when every cell matches, missing sentinels included.
/// The output is an order-preserving subsequence of the input; empty input
/// yields empty output.
pub fn dedupe_records(dataset: Dataset) -> Dataset {
    let row_count = dataset.rows.len();
    let mut seen = HashSet::with_capacity(row_count);
    let mut deduped = Dataset::new(dataset.columns);
    for row in dataset.rows {
        if seen.insert(row.clone()) {
            deduped.push_row(row);
        }
    }
    let removed = row_count - deduped.len();
    if removed > 0 {
        debug!(removed, retained = deduped.len(), "dropped duplicate rows");
    }
    deduped
}
