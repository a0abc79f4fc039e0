/// Client-side pagination of formatted rows.
///
/// The whole dataset is fetched on every request; paging is just a slice
/// over it. `page`/`paginate` are pure: the page index comes in as a
/// parameter and an index past the end yields an empty page.
///
/// `PageRequest` is the request-side half: it reads the zero-based `page`
/// query parameter and clamps it against the row count, the way a web
/// pager keeps users from landing on a blank page.

use crate::model::{FormattedRow, Page};

/// Name of the query parameter carrying the zero-based page index.
pub const PAGE_PARAM: &str = "page";

/// Rows `[index * size, index * size + size)`, truncated at the end.
///
/// A zero `page_size` is treated as 1.
pub fn page(rows: &[FormattedRow], page_size: usize, page_index: usize) -> &[FormattedRow] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Owned page slice plus the pre-slice row count.
pub fn paginate(rows: &[FormattedRow], page_size: usize, page_index: usize) -> Page {
    Page {
        rows: page(rows, page_size, page_index).to_vec(),
        page_index,
        page_size: page_size.max(1),
        total_rows: rows.len(),
    }
}

// ---------------------------------------------------------------------------
// Page context
// ---------------------------------------------------------------------------

/// The page a request asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub requested: usize,
}

impl PageRequest {
    pub fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// Reads `page` from a raw query string (`"page=2&foo=bar"`).
    ///
    /// Missing, negative or non-numeric values mean the first page.
    pub fn from_query(query: &str) -> Self {
        let requested = query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| *key == PAGE_PARAM)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        Self { requested }
    }

    /// Clamps the requested index into `0..page_count`.
    pub fn resolve(&self, total_rows: usize, page_size: usize) -> usize {
        let page_count = total_rows.div_ceil(page_size.max(1));
        self.requested.min(page_count.saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
