//! Key/value detail tables for heterogeneous payloads
//!
//! Search hits carry a free-form `payload` object whose keys are unknown ahead
//! of time. `build_table` turns any such object into an ordered row list the
//! renderers can draw without inspecting the raw JSON themselves.

use serde_json::{Map, Value};

use crate::format::{format_value, humanize_key};

/// One rendered row: humanized label, formatted value, and whether the value
/// should be drawn as a preformatted block (true for nested objects).
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub value: String,
    pub block: bool,
}

/// Ordered rows for one payload. Never empty: a payload with no entries still
/// produces a single informational row, so callers never special-case it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailTable {
    pub rows: Vec<TableRow>,
}

/// Build the detail table for an arbitrary payload object, preserving the
/// backend's key order.
pub fn build_table(payload: &Map<String, Value>) -> DetailTable {
    if payload.is_empty() {
        return DetailTable {
            rows: vec![TableRow {
                label: "Details".to_string(),
                value: "No additional details available".to_string(),
                block: false,
            }],
        };
    }

    let rows = payload
        .iter()
        .map(|(key, value)| TableRow {
            label: humanize_key(key),
            value: format_value(value),
            block: value.is_object(),
        })
        .collect();

    DetailTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_empty_payload_yields_single_notice_row() {
        let table = build_table(&Map::new());
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].value, "No additional details available");
        assert!(!table.rows[0].block);
    }

    #[test]
    fn test_row_per_key_in_order() {
        let table = build_table(&payload(json!({
            "Movie Name": "Alien",
            "release_year": 1979,
            "Budget": 11000000
        })));
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].label, "Movie Name");
        assert_eq!(table.rows[1].label, "Release Year");
        assert_eq!(table.rows[1].value, "1,979");
        assert_eq!(table.rows[2].value, "11.00 M");
    }

    #[test]
    fn test_nested_objects_flagged_as_blocks() {
        let table = build_table(&payload(json!({
            "ratings": { "imdb": 8.5 },
            "tags": ["space"]
        })));
        assert!(table.rows[0].block);
        assert!(!table.rows[1].block);
        assert_eq!(table.rows[1].value, "space");
    }

    #[test]
    fn test_null_values_become_placeholder() {
        let table = build_table(&payload(json!({ "genre": null })));
        assert_eq!(table.rows[0].value, "—");
    }
}
