/// Dataset listing: fetch → format → paginate.
///
/// `DataTableService` is the composition root for the pipeline. It owns the
/// settings and the API connector and exposes the two listing entry points
/// used by the HTTP endpoint and the command-line renderer. Every call
/// re-fetches the full dataset; nothing is cached between requests.

use crate::config::Settings;
use crate::datasets::Dataset;
use crate::format::format_records;
use crate::ingest::imgw::{ApiConnector, build_client};
use crate::model::{DataTable, FormattedHeader, Page};
use crate::pager::{PageRequest, paginate};
use chrono::{DateTime, Utc};

/// One rendered page of a dataset listing.
#[derive(Debug, Clone)]
pub struct TableView {
    pub dataset: Dataset,
    pub headers: FormattedHeader,
    pub page: Page,
    /// When the upstream fetch for this view completed.
    pub fetched_at: DateTime<Utc>,
}

pub struct DataTableService {
    settings: Settings,
    connector: ApiConnector,
}

impl DataTableService {
    pub fn new(settings: Settings, connector: ApiConnector) -> Self {
        Self { settings, connector }
    }

    /// Builds the HTTP client from `settings.http` and wires everything up.
    pub fn from_settings(settings: Settings) -> reqwest::Result<Self> {
        let client = build_client(settings.http.timeout())?;
        Ok(Self::new(settings, ApiConnector::new(client)))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fetches and formats the whole dataset, unpaged.
    pub fn data_table(&self, dataset: Dataset) -> DataTable {
        let records = self.connector.fetch(self.settings.url(dataset));
        format_records(&records, dataset.fields())
    }

    pub fn meteorological_table(&self) -> DataTable {
        self.data_table(Dataset::Meteorological)
    }

    pub fn hydrological_table(&self) -> DataTable {
        self.data_table(Dataset::Hydrological)
    }

    /// One page of `dataset`, using the dataset's fixed page size.
    ///
    /// The requested page is clamped to the last available page.
    pub fn list(&self, dataset: Dataset, request: PageRequest) -> TableView {
        let table = self.data_table(dataset);
        let fetched_at = Utc::now();

        let page_size = dataset.page_size();
        let page_index = request.resolve(table.rows.len(), page_size);
        let page = paginate(&table.rows, page_size, page_index);

        log::debug!(
            "{}: {} rows, page {} of {}",
            dataset,
            page.total_rows,
            page.page_index + 1,
            page.page_count().max(1)
        );

        TableView {
            dataset,
            headers: table.headers,
            page,
            fetched_at,
        }
    }

    pub fn list_meteorological(&self, request: PageRequest) -> TableView {
        self.list(Dataset::Meteorological, request)
    }

    pub fn list_hydrological(&self, request: PageRequest) -> TableView {
        self.list(Dataset::Hydrological, request)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
