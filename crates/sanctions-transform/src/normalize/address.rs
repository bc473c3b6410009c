use sanctions_model::Record;

/// Merge the positional address columns into one line.
///
/// Parts are probed in index order; missing columns and blank values are
/// silently skipped. Contributions are trimmed and comma-and-space-joined.
pub fn merge_address(record: &Record, address_columns: &[String]) -> String {
    let parts: Vec<&str> = address_columns
        .iter()
        .filter_map(|column| record.non_blank(column))
        .collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use sanctions_model::CellValue;

    use super::*;

    fn columns() -> Vec<String> {
        (1..=6).map(|idx| format!("Address {idx}")).collect()
    }

    #[test]
    fn skips_blank_parts_keeps_order() {
        let mut record = Record::new();
        record.insert("Address 1", CellValue::Text("12 Main St".to_string()));
        record.insert("Address 2", CellValue::Text(String::new()));
        record.insert("Address 3", CellValue::Text("Flat 4".to_string()));
        assert_eq!(merge_address(&record, &columns()), "12 Main St, Flat 4");
    }

    #[test]
    fn no_address_columns_yields_empty() {
        let record = Record::new();
        assert_eq!(merge_address(&record, &columns()), "");
    }

    #[test]
    fn trims_contributions() {
        let mut record = Record::new();
        record.insert("Address 5", CellValue::Text("  Damascus  ".to_string()));
        assert_eq!(merge_address(&record, &columns()), "Damascus");
    }
}
