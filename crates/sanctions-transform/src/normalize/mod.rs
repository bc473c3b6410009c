//! Per-record field normalization.
//!
//! The four sub-transforms (name merge, DOB normalization, country
//! extraction, address merge) are pure functions of one record plus the
//! column lists resolved against the dataset header. Schema gaps are
//! detected once per run, before any record is touched.

mod address;
mod countries;
mod dob;
mod name;

pub use address::merge_address;
pub use countries::extract_countries;
pub use dob::normalize_dob;
pub use name::merge_name;

use tracing::{debug, warn};

use sanctions_model::{CanonicalColumn, CellValue, Dataset, Record};

use crate::config::NormalizeConfig;

/// Configured columns resolved against a concrete header.
struct ResolvedColumns {
    name: Vec<String>,
    dob: Option<String>,
    country: Vec<String>,
    address: Vec<String>,
}

fn resolve(dataset: &Dataset, config: &NormalizeConfig) -> ResolvedColumns {
    let present = |columns: &[String]| -> Vec<String> {
        columns
            .iter()
            .filter(|column| dataset.has_column(column))
            .cloned()
            .collect()
    };
    let name = present(&config.name_columns);
    if name.is_empty() {
        warn!(
            expected = ?config.name_columns,
            "no name-part column exists; Full Name will be missing for every record"
        );
    }
    let dob = if dataset.has_column(&config.dob_column) {
        Some(config.dob_column.clone())
    } else {
        warn!(
            column = %config.dob_column,
            "DOB column absent; DOB will be missing for every record"
        );
        None
    };
    ResolvedColumns {
        name,
        dob,
        country: present(&config.country_columns),
        address: present(&config.address_columns),
    }
}

/// Map every retained row to its normalized form.
///
/// `Associated Countries` and `Full Address` are always materialized
/// (possibly as the empty string); `Full Name` only when at least one
/// configured name column exists; DOB is rewritten in place when its
/// column exists. Record count is unchanged.
pub fn normalize_dataset(dataset: Dataset, config: &NormalizeConfig) -> Dataset {
    let resolved = resolve(&dataset, config);

    let mut columns = dataset.columns.clone();
    if !resolved.name.is_empty() {
        columns.push(CanonicalColumn::FullName.label().to_string());
    }
    columns.push(CanonicalColumn::AssociatedCountries.label().to_string());
    columns.push(CanonicalColumn::FullAddress.label().to_string());

    let mut normalized = Dataset::new(columns);
    for row in dataset.rows {
        normalized.push_row(normalize_record(row, &resolved));
    }
    normalized
}

fn normalize_record(mut row: Record, resolved: &ResolvedColumns) -> Record {
    if !resolved.name.is_empty() {
        row.insert(
            CanonicalColumn::FullName.label(),
            CellValue::Text(merge_name(&row, &resolved.name)),
        );
    }
    if let Some(dob_column) = &resolved.dob {
        let cell = match row.text(dob_column) {
            Some(raw) => match normalize_dob(raw) {
                Some(normalized) => CellValue::Text(normalized),
                None => {
                    debug!(value = raw, "unparseable DOB value, degrading to missing");
                    CellValue::Missing
                }
            },
            None => CellValue::Missing,
        };
        row.insert(dob_column.clone(), cell);
    }
    row.insert(
        CanonicalColumn::AssociatedCountries.label(),
        CellValue::Text(extract_countries(&row, &resolved.country)),
    );
    row.insert(
        CanonicalColumn::FullAddress.label(),
        CellValue::Text(merge_address(&row, &resolved.address)),
    );
    row
}
