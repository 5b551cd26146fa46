//! Parsers for the analyser's delimited text fields.
//!
//! The analyser job flattens detail data into single string fields so the
//! report stays one row per tenant: list fields separate entries with a
//! literal `<br />`, and the unused-license field additionally packs
//! `key: value` pairs into each entry. These parsers turn that text back
//! into structured rows for the drill-down views.
//!
//! Malformed input never fails a render: a field segment without a
//! `": "` separator is skipped with a warning, and a record that ends up
//! without a SKU is dropped the same way.

use log::warn;

/// Entry separator used by every delimited field.
pub const ENTRY_DELIMITER: &str = "<br />";

/// Field separator inside one unused-license record.
const FIELD_DELIMITER: &str = ", ";

/// Key/value separator inside one field.
const KEY_DELIMITER: &str = ": ";

/// One SKU with unassigned seats. Values stay as the server-supplied
/// strings; the drill-down table displays them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseRecord {
    pub sku: String,
    pub purchased: String,
    pub consumed: String,
}

/// Split a delimited list field into its entries, order preserved.
///
/// Absent or empty input yields an empty list; empty segments (for example
/// from a trailing delimiter) are dropped.
pub fn parse_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(value) => value
            .split(ENTRY_DELIMITER)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect(),
    }
}

/// Parse the unused-license record list into structured rows, sorted by SKU
/// case-insensitively in descending order.
///
/// The descending direction matches the console's historical behaviour and
/// is kept deliberately; see DESIGN.md.
pub fn parse_license_records(raw: Option<&str>) -> Vec<LicenseRecord> {
    let mut records: Vec<LicenseRecord> = parse_list(raw)
        .iter()
        .filter_map(|segment| parse_one_record(segment))
        .collect();
    records.sort_by(|a, b| b.sku.to_lowercase().cmp(&a.sku.to_lowercase()));
    records
}

fn parse_one_record(segment: &str) -> Option<LicenseRecord> {
    let mut record = LicenseRecord::default();
    let mut has_sku = false;

    for field in segment.split(FIELD_DELIMITER) {
        let Some((key, value)) = field.split_once(KEY_DELIMITER) else {
            warn!("unused-license field without a key/value separator: {field:?}");
            continue;
        };
        // Duplicate keys within a record: last one wins. Unknown keys are
        // ignored so new analyser fields do not break older consoles.
        match key {
            "SKU" => {
                record.sku = value.to_owned();
                has_sku = true;
            }
            "Purchased" => record.purchased = value.to_owned(),
            "Consumed" => record.consumed = value.to_owned(),
            _ => {}
        }
    }

    if has_sku {
        Some(record)
    } else {
        warn!("unused-license record without a SKU: {segment:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku: &str, purchased: &str, consumed: &str) -> LicenseRecord {
        LicenseRecord {
            sku: sku.to_owned(),
            purchased: purchased.to_owned(),
            consumed: consumed.to_owned(),
        }
    }

    #[test]
    fn test_parse_list_preserves_order_and_count() {
        let raw = "box1@contoso.example<br />box2@contoso.example<br />box3@contoso.example";
        let entries = parse_list(Some(raw));
        assert_eq!(raw.split(ENTRY_DELIMITER).count(), entries.len());
        assert_eq!(
            entries,
            vec![
                "box1@contoso.example",
                "box2@contoso.example",
                "box3@contoso.example"
            ]
        );
    }

    #[test]
    fn test_parse_list_single_entry() {
        assert_eq!(parse_list(Some("only@contoso.example")), vec![
            "only@contoso.example"
        ]);
    }

    #[test]
    fn test_parse_list_empty_and_absent() {
        assert!(parse_list(None).is_empty());
        assert!(parse_list(Some("")).is_empty());
    }

    #[test]
    fn test_parse_list_drops_trailing_delimiter_segment() {
        assert_eq!(parse_list(Some("a@t<br />")), vec!["a@t"]);
    }

    #[test]
    fn test_parse_single_record() {
        let records = parse_license_records(Some("SKU: A, Purchased: 10, Consumed: 3"));
        assert_eq!(records, vec![record("A", "10", "3")]);
    }

    #[test]
    fn test_records_sorted_descending_case_insensitive() {
        let records = parse_license_records(Some(
            "SKU: b, Purchased: 1, Consumed: 1<br />SKU: A, Purchased: 2, Consumed: 2",
        ));
        assert_eq!(
            records,
            vec![record("b", "1", "1"), record("A", "2", "2")]
        );
    }

    #[test]
    fn test_malformed_field_is_skipped() {
        let records =
            parse_license_records(Some("SKU: A, not-a-pair, Consumed: 3"));
        assert_eq!(records, vec![record("A", "", "3")]);
    }

    #[test]
    fn test_record_without_sku_is_dropped() {
        let records = parse_license_records(Some(
            "Purchased: 10, Consumed: 3<br />SKU: B, Purchased: 5, Consumed: 5",
        ));
        assert_eq!(records, vec![record("B", "5", "5")]);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let records = parse_license_records(Some("SKU: A, SKU: B, Purchased: 1"));
        assert_eq!(records, vec![record("B", "1", "")]);
    }

    #[test]
    fn test_value_containing_key_delimiter_is_kept_whole() {
        // Only the first ": " splits; the rest belongs to the value.
        let records = parse_license_records(Some("SKU: Plan: E5, Purchased: 4"));
        assert_eq!(records, vec![record("Plan: E5", "4", "")]);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_license_records(None).is_empty());
        assert!(parse_license_records(Some("")).is_empty());
    }
}
