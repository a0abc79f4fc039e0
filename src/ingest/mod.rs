/// Upstream data sources.
///
/// Only the IMGW public data API for now; another source would get its own
/// file here rather than growing `imgw.rs`.

pub mod imgw;

#[cfg(test)]
pub(crate) mod fixtures;
