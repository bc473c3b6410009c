use tracing::warn;

use sanctions_model::{CanonicalColumn, CellValue, Dataset, Record};

/// Outcome of canonical projection.
#[derive(Debug)]
pub struct Projection {
    /// The dataset restricted to canonical columns that exist, in
    /// canonical order.
    pub dataset: Dataset,
    /// Canonical columns absent from the normalized header, in canonical
    /// order.
    pub missing_columns: Vec<String>,
}

/// Project onto the fixed canonical column set.
///
/// Absent canonical columns are reported once each and dropped from the
/// output; record count is unchanged.
pub fn project_canonical(dataset: &Dataset) -> Projection {
    let mut kept: Vec<String> = Vec::new();
    let mut missing_columns: Vec<String> = Vec::new();
    for column in CanonicalColumn::ALL {
        if dataset.has_column(column.label()) {
            kept.push(column.label().to_string());
        } else {
            warn!(column = %column, "canonical column absent from normalized data");
            missing_columns.push(column.label().to_string());
        }
    }

    let mut projected = Dataset::new(kept.clone());
    for row in &dataset.rows {
        let mut out = Record::new();
        for name in &kept {
            let cell = row.cell(name).cloned().unwrap_or(CellValue::Missing);
            out.insert(name.clone(), cell);
        }
        projected.push_row(out);
    }
    Projection {
        dataset: projected,
        missing_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_existing_canonical_columns_in_order() {
        let mut dataset = Dataset::new(vec![
            "Other Information".to_string(),
            "Full Name".to_string(),
            "Scratch".to_string(),
        ]);
        let mut row = Record::new();
        row.insert("Full Name", CellValue::Text("John Doe".to_string()));
        row.insert("Other Information", CellValue::Missing);
        row.insert("Scratch", CellValue::Text("x".to_string()));
        dataset.push_row(row);

        let projection = project_canonical(&dataset);
        assert_eq!(
            projection.dataset.columns,
            vec!["Full Name".to_string(), "Other Information".to_string()]
        );
        assert_eq!(projection.dataset.len(), 1);
        assert!(projection.dataset.rows[0].cell("Scratch").is_none());
        assert_eq!(projection.missing_columns.len(), 9);
        assert_eq!(projection.missing_columns[0], "DOB");
    }
}
