/// Shared data types for the IMGW table pipeline.
///
/// Records flow through three shapes:
///   RawRecord (as received) → FormattedRow (display values) → Page (slice)
///
/// None of these are persisted; every listing request builds them fresh.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Placeholder shown in place of any empty upstream value.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Message rendered when a table has no rows to show.
pub const EMPTY_TABLE_MESSAGE: &str = "No entries available";

/// One observation object exactly as returned by the IMGW API.
///
/// Keys are the upstream Polish field identifiers. The schema is not ours,
/// so every lookup must tolerate missing keys, nulls and empty strings.
pub type RawRecord = Map<String, Value>;

/// One display row, aligned positionally with the `FieldMapping` it was
/// built from.
pub type FormattedRow = Vec<Value>;

/// A single column definition: which upstream field feeds it, the stable
/// key for the column and the label shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Field name in the upstream JSON object (e.g. `"stacja"`).
    pub source_field: &'static str,
    /// Column key used by renderers (e.g. `"station"`).
    pub column_key: &'static str,
    /// Resolved header label (e.g. `"Station"`).
    pub display_label: &'static str,
}

/// Ordered column-key → label mapping.
///
/// Serializes as a JSON object whose key order matches the mapping order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedHeader {
    columns: Vec<(String, String)>,
}

impl FormattedHeader {
    pub fn push(&mut self, column_key: impl Into<String>, display_label: impl Into<String>) {
        self.columns.push((column_key.into(), display_label.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate `(column_key, display_label)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, l)| (k.as_str(), l.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(_, l)| l.as_str())
    }

    /// Label for a column key, if present.
    pub fn label(&self, column_key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == column_key)
            .map(|(_, l)| l.as_str())
    }
}

impl Serialize for FormattedHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (key, label) in &self.columns {
            map.serialize_entry(key, label)?;
        }
        map.end()
    }
}

/// Header plus every formatted row of one dataset listing, before paging.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataTable {
    pub headers: FormattedHeader,
    pub rows: Vec<FormattedRow>,
}

/// A bounded slice of formatted rows plus what a pager needs to render
/// navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub rows: Vec<FormattedRow>,
    /// Zero-based page index this slice was taken at.
    pub page_index: usize,
    pub page_size: usize,
    /// Row count before slicing.
    pub total_rows: usize,
}

impl Page {
    /// Number of pages needed to show `total_rows` at `page_size` per page.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_rows.div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
