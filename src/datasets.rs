/// Dataset registry for the IMGW public data API.
///
/// Defines the two datasets this service lists, the fixed column mapping
/// for each, their page sizes and default endpoint URLs. This is the single
/// source of truth for upstream field names; other modules should get
/// mappings from here rather than hardcoding Polish identifiers.

use crate::model::FieldMapping;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Default endpoints
// ---------------------------------------------------------------------------

/// Synoptic station observations (weather).
pub const DEFAULT_API_URL_METEOROLOGICAL: &str = "https://danepubliczne.imgw.pl/api/data/synop/";

/// Hydrological station observations (rivers).
pub const DEFAULT_API_URL_HYDROLOGICAL: &str = "https://danepubliczne.imgw.pl/api/data/hydro/";

// ---------------------------------------------------------------------------
// Page sizes (presentation policy, not configuration)
// ---------------------------------------------------------------------------

pub const METEOROLOGICAL_PAGE_SIZE: usize = 10;
pub const HYDROLOGICAL_PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Field mappings
// ---------------------------------------------------------------------------

/// Columns of the synop table, in display order.
pub static METEOROLOGICAL_FIELDS: &[FieldMapping] = &[
    FieldMapping { source_field: "stacja", column_key: "station", display_label: "Station" },
    FieldMapping { source_field: "data_pomiaru", column_key: "date", display_label: "Date" },
    FieldMapping { source_field: "godzina_pomiaru", column_key: "hour", display_label: "Hour" },
    FieldMapping { source_field: "temperatura", column_key: "temperature", display_label: "Temperature" },
    FieldMapping { source_field: "predkosc_wiatru", column_key: "wind_speed", display_label: "Wind Speed" },
    FieldMapping {
        source_field: "wilgotnosc_wzgledna",
        column_key: "relative_humidity",
        display_label: "Relative Humidity",
    },
    FieldMapping { source_field: "suma_opadu", column_key: "rainfall", display_label: "Rainfall" },
    FieldMapping { source_field: "cisnienie", column_key: "pressure", display_label: "Pressure" },
];

/// Columns of the hydro table, in display order.
pub static HYDROLOGICAL_FIELDS: &[FieldMapping] = &[
    FieldMapping { source_field: "stacja", column_key: "station", display_label: "Station" },
    FieldMapping { source_field: "rzeka", column_key: "river", display_label: "River" },
    FieldMapping { source_field: "województwo", column_key: "voivodeship", display_label: "Voivodeship" },
    FieldMapping { source_field: "stan_wody", column_key: "water_level", display_label: "Water level" },
    FieldMapping {
        source_field: "stan_wody_data_pomiaru",
        column_key: "water_level_date",
        display_label: "Water level date",
    },
    FieldMapping {
        source_field: "temperatura_wody",
        column_key: "water_temperature",
        display_label: "Water temperature",
    },
    FieldMapping {
        source_field: "temperatura_wody_data_pomiaru",
        column_key: "water_temperature_date",
        display_label: "Water temperature date",
    },
];

// ---------------------------------------------------------------------------
// Dataset selector
// ---------------------------------------------------------------------------

/// Which IMGW table a listing request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Meteorological,
    Hydrological,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Meteorological, Dataset::Hydrological];

    /// Column mapping used to format this dataset's records.
    pub fn fields(self) -> &'static [FieldMapping] {
        match self {
            Dataset::Meteorological => METEOROLOGICAL_FIELDS,
            Dataset::Hydrological => HYDROLOGICAL_FIELDS,
        }
    }

    pub fn page_size(self) -> usize {
        match self {
            Dataset::Meteorological => METEOROLOGICAL_PAGE_SIZE,
            Dataset::Hydrological => HYDROLOGICAL_PAGE_SIZE,
        }
    }

    pub fn default_url(self) -> &'static str {
        match self {
            Dataset::Meteorological => DEFAULT_API_URL_METEOROLOGICAL,
            Dataset::Hydrological => DEFAULT_API_URL_HYDROLOGICAL,
        }
    }

    /// Path segment and CLI name (`"meteorological"` / `"hydrological"`).
    pub fn slug(self) -> &'static str {
        match self {
            Dataset::Meteorological => "meteorological",
            Dataset::Hydrological => "hydrological",
        }
    }

    /// Human-readable name used in settings messages.
    pub fn title(self) -> &'static str {
        match self {
            Dataset::Meteorological => "API URL Meteorological",
            Dataset::Hydrological => "API URL Hydrological",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "meteorological" | "meteo" | "synop" => Ok(Dataset::Meteorological),
            "hydrological" | "hydro" => Ok(Dataset::Hydrological),
            other => Err(format!(
                "Unknown dataset '{}' (expected 'meteorological' or 'hydrological')",
                other
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mapping_lengths() {
        assert_eq!(METEOROLOGICAL_FIELDS.len(), 8);
        assert_eq!(HYDROLOGICAL_FIELDS.len(), 7);
    }

    #[test]
    fn test_column_keys_unique() {
        for dataset in Dataset::ALL {
            let keys: HashSet<_> = dataset.fields().iter().map(|f| f.column_key).collect();
            assert_eq!(keys.len(), dataset.fields().len(), "{}: duplicate column key", dataset);
        }
    }

    #[test]
    fn test_source_fields_unique() {
        for dataset in Dataset::ALL {
            let fields: HashSet<_> = dataset.fields().iter().map(|f| f.source_field).collect();
            assert_eq!(fields.len(), dataset.fields().len(), "{}: duplicate source field", dataset);
        }
    }

    #[test]
    fn test_station_is_first_column() {
        for dataset in Dataset::ALL {
            let first = dataset.fields()[0];
            assert_eq!(first.source_field, "stacja");
            assert_eq!(first.column_key, "station");
            assert_eq!(first.display_label, "Station");
        }
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(Dataset::Meteorological.page_size(), 10);
        assert_eq!(Dataset::Hydrological.page_size(), 20);
    }

    #[test]
    fn test_default_urls() {
        assert_eq!(
            Dataset::Meteorological.default_url(),
            "https://danepubliczne.imgw.pl/api/data/synop/"
        );
        assert_eq!(
            Dataset::Hydrological.default_url(),
            "https://danepubliczne.imgw.pl/api/data/hydro/"
        );
    }

    #[test]
    fn test_parse_dataset() {
        assert_eq!("meteorological".parse::<Dataset>(), Ok(Dataset::Meteorological));
        assert_eq!("Hydro".parse::<Dataset>(), Ok(Dataset::Hydrological));
        assert!("climate".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.slug().parse::<Dataset>(), Ok(dataset));
        }
    }
}
