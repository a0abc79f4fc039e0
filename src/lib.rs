/// imgw_service: IMGW public weather and river data, as paged tables.
///
/// # Module structure
///
/// ```text
/// imgw_service
/// ├── model     — shared data types (RawRecord, FieldMapping, Page, …)
/// ├── datasets  — the two IMGW datasets: field mappings, page sizes, default URLs
/// ├── config    — settings loader/writer (imgw.toml + environment overrides)
/// ├── ingest
/// │   ├── imgw  — IMGW API client: blocking GET + JSON array parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── format    — raw records → header + display rows
/// ├── pager     — client-side page slicing + page request parsing
/// ├── table     — fetch → format → paginate composition root
/// ├── render    — plain-text table output
/// └── endpoint  — JSON HTTP API over the listings
/// ```

/// Public modules
pub mod config;
pub mod datasets;
pub mod endpoint;
pub mod format;
pub mod ingest;
pub mod model;
pub mod pager;
pub mod render;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;
