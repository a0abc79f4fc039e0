/// HTTP endpoint serving paged IMGW tables as JSON
///
/// Provides a small read-only API for front ends that render the tables.
/// Requests are handled one at a time on the calling thread; each listing
/// request performs one upstream fetch.
///
/// Endpoints:
/// - GET /meteorological?page={n} - Synop stations, 10 rows per page
/// - GET /hydrological?page={n}   - Hydro stations, 20 rows per page
/// - GET /health                  - Service health check

use crate::datasets::Dataset;
use crate::model::{EMPTY_TABLE_MESSAGE, FormattedHeader, FormattedRow};
use crate::pager::PageRequest;
use crate::table::{DataTableService, TableView};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// Paged table response
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub dataset: String,
    /// Column key → label, in column order
    pub headers: FormattedHeader,
    /// Rows for this page, aligned with `headers`
    pub rows: Vec<FormattedRow>,

    /// Pager state
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub page_count: usize,

    /// Set when there are no rows to show
    pub empty_message: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl From<TableView> for TableResponse {
    fn from(view: TableView) -> Self {
        let page_count = view.page.page_count();
        let empty_message = view
            .page
            .is_empty()
            .then(|| EMPTY_TABLE_MESSAGE.to_string());

        TableResponse {
            dataset: view.dataset.slug().to_string(),
            headers: view.headers,
            rows: view.page.rows,
            page: view.page.page_index,
            page_size: view.page.page_size,
            total_rows: view.page.total_rows,
            page_count,
            empty_message,
            fetched_at: view.fetched_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Resolves a request URL (path plus optional query) to a status code and
/// JSON body.
pub fn route(service: &DataTableService, url: &str) -> (u16, serde_json::Value) {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = path.trim_end_matches('/');

    match path {
        "/health" => (200, health_body()),
        "/meteorological" => handle_table(service, Dataset::Meteorological, query),
        "/hydrological" => handle_table(service, Dataset::Hydrological, query),
        _ => (
            404,
            serde_json::json!({
                "error": "Not found",
                "available_endpoints": ["/health", "/meteorological?page={n}", "/hydrological?page={n}"]
            }),
        ),
    }
}

/// Handle /health endpoint
fn health_body() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    })
}

/// Handle /meteorological and /hydrological endpoints
fn handle_table(service: &DataTableService, dataset: Dataset, query: &str) -> (u16, serde_json::Value) {
    let view = service.list(dataset, PageRequest::from_query(query));
    match serde_json::to_value(TableResponse::from(view)) {
        Ok(body) => (200, body),
        Err(e) => (
            500,
            serde_json::json!({
                "error": format!("Failed to serialize table: {}", e),
                "dataset": dataset.slug()
            }),
        ),
    }
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start HTTP endpoint server on the specified port
pub fn start_endpoint_server(port: u16, service: DataTableService) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    log::info!("HTTP endpoint listening on http://0.0.0.0:{}", port);
    log::info!("   GET /meteorological?page={{n}} - Synop table");
    log::info!("   GET /hydrological?page={{n}} - Hydro table");
    log::info!("   GET /health - Service health check");

    for request in server.incoming_requests() {
        let (status, body) = if *request.method() == tiny_http::Method::Get {
            route(&service, request.url())
        } else {
            (405, serde_json::json!({ "error": "Method not allowed" }))
        };

        log::debug!("{} {} -> {}", request.method(), request.url(), status);

        if let Err(e) = request.respond(create_response(status, &body)) {
            log::warn!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: &serde_json::Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string());

    let response = tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code));

    match tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json; charset=utf-8"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::ingest::fixtures;
    use crate::test_support::FixtureServer;
    use serde_json::json;

    fn service_for(server: &FixtureServer) -> DataTableService {
        let mut settings = Settings::default();
        settings.update(Dataset::Meteorological, &server.url("/synop/")).unwrap();
        settings.update(Dataset::Hydrological, &server.url("/hydro/")).unwrap();
        DataTableService::from_settings(settings).unwrap()
    }

    #[test]
    fn test_health() {
        let server = FixtureServer::start(200, "[]");
        let (status, body) = route(&service_for(&server), "/health");
        assert_eq!(status, 200);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["service"], json!("imgw_service"));
    }

    #[test]
    fn test_meteorological_table_body() {
        let server = FixtureServer::start(200, fixtures::synop_json());
        let (status, body) = route(&service_for(&server), "/meteorological?page=0");

        assert_eq!(status, 200);
        assert_eq!(body["dataset"], json!("meteorological"));
        assert_eq!(body["page_size"], json!(10));
        assert_eq!(body["total_rows"], json!(3));
        assert_eq!(body["page_count"], json!(1));
        assert_eq!(body["empty_message"], json!(null));
        assert_eq!(body["rows"][0][0], json!("Białystok"));

        // header keys keep column order
        let keys: Vec<&String> = body["headers"].as_object().unwrap().keys().collect();
        assert_eq!(keys[0], "station");
        assert_eq!(keys[7], "pressure");
    }

    #[test]
    fn test_hydrological_trailing_slash() {
        let server = FixtureServer::start(200, fixtures::hydro_json());
        let (status, body) = route(&service_for(&server), "/hydrological/");
        assert_eq!(status, 200);
        assert_eq!(body["page_size"], json!(20));
        assert_eq!(body["headers"]["voivodeship"], json!("Voivodeship"));
    }

    #[test]
    fn test_empty_upstream_sets_empty_message() {
        let server = FixtureServer::start(200, "[]");
        let (status, body) = route(&service_for(&server), "/hydrological?page=3");
        assert_eq!(status, 200);
        assert_eq!(body["rows"], json!([]));
        assert_eq!(body["total_rows"], json!(0));
        assert_eq!(body["empty_message"], json!("No entries available"));
    }

    #[test]
    fn test_unknown_path() {
        let server = FixtureServer::start(200, "[]");
        let (status, body) = route(&service_for(&server), "/climate");
        assert_eq!(status, 404);
        assert_eq!(body["error"], json!("Not found"));
    }
}
