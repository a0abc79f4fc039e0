/// IMGW public data API client.
///
/// Retrieves observation tables from the Institute of Meteorology and Water
/// Management (IMGW-PIB) public data service:
///   https://danepubliczne.imgw.pl/api/data/synop/   (weather stations)
///   https://danepubliczne.imgw.pl/api/data/hydro/   (river gauges)
///
/// Both endpoints return a flat JSON array of objects, one per station,
/// with readings encoded as strings. Records are passed on as-is; column
/// selection and placeholder substitution happen in `format`.
///
/// Failure policy: `fetch` never returns an error. Any transport or parse
/// failure is logged once on the `imgw` target and reported to the caller
/// as an empty record set, which renders as an empty table.

use crate::model::RawRecord;
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

/// Log target for upstream fetch failures.
pub const LOG_TARGET: &str = "imgw";

const USER_AGENT: &str = concat!("imgw_service/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Errors
// ============================================================================

/// Why a fetch produced no records.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} is not valid JSON")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {url} is a JSON {found}, expected an array")]
    NotAnArray { url: String, found: &'static str },

    #[error("element {index} of the response from {url} is a JSON {found}, expected an object")]
    NotAnObject {
        url: String,
        index: usize,
        found: &'static str,
    },
}

impl FetchError {
    /// Short, stable name for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request { .. } => "RequestError",
            FetchError::Status { .. } => "StatusError",
            FetchError::Body { .. } => "BodyError",
            FetchError::Json { .. } => "JsonError",
            FetchError::NotAnArray { .. } => "NotAnArray",
            FetchError::NotAnObject { .. } => "NotAnObject",
        }
    }
}

// ============================================================================
// API Client
// ============================================================================

/// Builds the blocking HTTP client used for IMGW requests.
///
/// `timeout` of `None` keeps reqwest's default request timeout.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Fetches IMGW observation tables over HTTP.
#[derive(Debug, Clone)]
pub struct ApiConnector {
    client: reqwest::blocking::Client,
}

impl ApiConnector {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Fetch all records from `uri`.
    ///
    /// Returns an empty vector on any failure after logging it; callers
    /// never need to distinguish "upstream down" from "no data".
    pub fn fetch(&self, uri: &str) -> Vec<RawRecord> {
        match self.try_fetch(uri) {
            Ok(records) => records,
            Err(e) => {
                log::error!(
                    target: LOG_TARGET,
                    "{}: {}",
                    e.kind(),
                    error_chain(&e)
                );
                Vec::new()
            }
        }
    }

    /// Fetch all records from `uri`, reporting failures as `FetchError`.
    pub fn try_fetch(&self, uri: &str) -> Result<Vec<RawRecord>, FetchError> {
        let response = self
            .client
            .get(uri)
            .header("Accept", "application/json")
            .send()
            .map_err(|source| FetchError::Request {
                url: uri.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: uri.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|source| FetchError::Body {
            url: uri.to_string(),
            source,
        })?;

        parse_records(uri, &body)
    }
}

// ============================================================================
// Response parsing
// ============================================================================

/// Parses an IMGW response body into records.
///
/// The root must be an array and every element an object; anything else is
/// treated as a malformed response rather than partially accepted.
pub fn parse_records(url: &str, body: &str) -> Result<Vec<RawRecord>, FetchError> {
    let root: Value = serde_json::from_str(body).map_err(|source| FetchError::Json {
        url: url.to_string(),
        source,
    })?;

    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::NotAnArray {
                url: url.to_string(),
                found: json_type_name(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(FetchError::NotAnObject {
                url: url.to_string(),
                index,
                found: json_type_name(&other),
            }),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders an error with all of its sources, outermost first.
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// ============================================================================
// Tests
// ============================================================================
