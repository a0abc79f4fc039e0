/// Record formatting: raw IMGW objects → display-ready table data.
///
/// Every row is built by walking the `FieldMapping` in declared order, so
/// row position `i` always lines up with header column `i` regardless of
/// the key order (or key presence) in the upstream object. Formatting is
/// total; any record shape produces a full-width row.

use crate::model::{DataTable, EMPTY_PLACEHOLDER, FieldMapping, FormattedHeader, FormattedRow, RawRecord};
use serde_json::Value;

/// Builds the ordered `column_key → display_label` header for a mapping.
pub fn build_header(mapping: &[FieldMapping]) -> FormattedHeader {
    let mut header = FormattedHeader::default();
    for field in mapping {
        header.push(field.column_key, field.display_label);
    }
    header
}

/// Builds one display row per record, preserving API response order.
pub fn build_rows(records: &[RawRecord], mapping: &[FieldMapping]) -> Vec<FormattedRow> {
    records.iter().map(|record| build_row(record, mapping)).collect()
}

/// Header and rows for a full record set.
pub fn format_records(records: &[RawRecord], mapping: &[FieldMapping]) -> DataTable {
    DataTable {
        headers: build_header(mapping),
        rows: build_rows(records, mapping),
    }
}

fn build_row(record: &RawRecord, mapping: &[FieldMapping]) -> FormattedRow {
    mapping
        .iter()
        .map(|field| match record.get(field.source_field) {
            Some(value) if !is_empty_value(value) => value.clone(),
            _ => Value::String(EMPTY_PLACEHOLDER.to_string()),
        })
        .collect()
}

/// Loose emptiness check applied to upstream values.
///
/// Treats as empty: `null`, `false`, `""`, `"0"`, numeric zero, and empty
/// arrays/objects. Zero readings (e.g. no rainfall) therefore render as the
/// placeholder, matching what the public tables have always shown.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty() || s == "0",
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
