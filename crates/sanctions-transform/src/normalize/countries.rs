use std::sync::LazyLock;

use regex::Regex;

use sanctions_model::Record;

/// Numbered country mention, e.g. `(1) France (2) Spain`.
static NUMBERED_COUNTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)\s*([A-Za-z]+)").expect("valid country pattern"));

/// Collect country mentions from the candidate columns into one field.
///
/// Each non-missing, non-blank value is scanned for numbered mentions;
/// every matched name is appended if not already collected (first-seen
/// order, case-sensitive exact match). A value with no numbered mention
/// counts as a single country token. Rendered comma-and-space-joined;
/// no candidate column present yields the empty string.
pub fn extract_countries(record: &Record, country_columns: &[String]) -> String {
    let mut countries: Vec<String> = Vec::new();
    for column in country_columns {
        let Some(value) = record.non_blank(column) else {
            continue;
        };
        let mut matched = false;
        for captures in NUMBERED_COUNTRY.captures_iter(value) {
            matched = true;
            let country = &captures[2];
            if !countries.iter().any(|seen| seen.as_str() == country) {
                countries.push(country.to_string());
            }
        }
        if !matched && !countries.iter().any(|seen| seen.as_str() == value) {
            countries.push(value.to_string());
        }
    }
    countries.join(", ")
}

#[cfg(test)]
mod tests {
    use sanctions_model::CellValue;

    use super::*;

    fn candidates() -> Vec<String> {
        vec![
            "Country of Birth".to_string(),
            "Nationality".to_string(),
            "Country".to_string(),
        ]
    }

    fn record_with(column: &str, value: &str) -> Record {
        let mut record = Record::new();
        record.insert(column, CellValue::Text(value.to_string()));
        record
    }

    #[test]
    fn deduplicates_numbered_mentions() {
        let record = record_with("Nationality", "(1) France (2) France (3) Spain");
        assert_eq!(extract_countries(&record, &candidates()), "France, Spain");
    }

    #[test]
    fn plain_value_is_one_token() {
        let record = record_with("Country", "Germany");
        assert_eq!(extract_countries(&record, &candidates()), "Germany");
    }

    #[test]
    fn merges_across_columns_first_seen_order() {
        let mut record = record_with("Country of Birth", "(1) Iraq");
        record.insert("Nationality", CellValue::Text("(1) Iran (2) Iraq".to_string()));
        record.insert("Country", CellValue::Text("Iraq".to_string()));
        assert_eq!(extract_countries(&record, &candidates()), "Iraq, Iran");
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut record = record_with("Country of Birth", "FRANCE");
        record.insert("Country", CellValue::Text("France".to_string()));
        assert_eq!(extract_countries(&record, &candidates()), "FRANCE, France");
    }

    #[test]
    fn no_candidate_columns_yields_empty() {
        let record = record_with("Position", "Minister");
        assert_eq!(extract_countries(&record, &candidates()), "");
    }
}
