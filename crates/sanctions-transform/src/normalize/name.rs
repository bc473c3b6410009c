use sanctions_model::Record;

/// Merge the name-part columns into a single full name.
///
/// Parts are taken in configured column order, trimmed, and joined with
/// single spaces; missing and blank parts contribute nothing. All parts
/// absent yields the empty string.
pub fn merge_name(record: &Record, name_columns: &[String]) -> String {
    let mut full_name = String::new();
    for column in name_columns {
        let Some(part) = record.non_blank(column) else {
            continue;
        };
        if !full_name.is_empty() {
            full_name.push(' ');
        }
        full_name.push_str(part);
    }
    full_name
}
