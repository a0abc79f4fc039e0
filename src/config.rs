/// Service settings loader - parses imgw.toml
///
/// Holds the two IMGW endpoint URLs and HTTP client options. Settings are
/// read once at start-up and are read-only while serving requests; the
/// `imgw_settings` binary is the only writer.
///
/// Resolution order for each URL:
///   1. `IMGW_API_URL_METEOROLOGICAL` / `IMGW_API_URL_HYDROLOGICAL`
///   2. imgw.toml `[api]` table
///   3. built-in default from `datasets`
///
/// An empty value at any level means "use the default".

use crate::datasets::{DEFAULT_API_URL_HYDROLOGICAL, DEFAULT_API_URL_METEOROLOGICAL, Dataset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file used when neither `--config` nor `IMGW_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "imgw.toml";

pub const ENV_CONFIG_PATH: &str = "IMGW_CONFIG";
pub const ENV_API_URL_METEOROLOGICAL: &str = "IMGW_API_URL_METEOROLOGICAL";
pub const ENV_API_URL_HYDROLOGICAL: &str = "IMGW_API_URL_HYDROLOGICAL";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The URL for '{name}' is not valid: {url}")]
    InvalidUrl { name: &'static str, url: String },
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Root of imgw.toml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

/// Upstream endpoint URLs, one per dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default)]
    pub meteorological_url: String,
    #[serde(default)]
    pub hydrological_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            meteorological_url: DEFAULT_API_URL_METEOROLOGICAL.to_string(),
            hydrological_url: DEFAULT_API_URL_HYDROLOGICAL.to_string(),
        }
    }
}

/// HTTP client options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HttpSettings {
    /// Request timeout in seconds; unset keeps the client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl HttpSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Settings {
    /// Picks the settings path: explicit argument, then `IMGW_CONFIG`,
    /// then `imgw.toml` in the working directory.
    pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
        explicit
            .map(PathBuf::from)
            .or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads settings from `path`, applies environment overrides and
    /// validates the result. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::load_from_path(path)?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Reads `path` without overrides or validation.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {:?}, using default IMGW endpoints", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces URLs with non-empty values returned by `lookup` for the
    /// `IMGW_API_URL_*` variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for dataset in Dataset::ALL {
            let key = match dataset {
                Dataset::Meteorological => ENV_API_URL_METEOROLOGICAL,
                Dataset::Hydrological => ENV_API_URL_HYDROLOGICAL,
            };
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *self.url_slot(dataset) = value.trim().to_string();
            }
        }
    }

    /// Endpoint URL for `dataset`, falling back to the default when unset.
    pub fn url(&self, dataset: Dataset) -> &str {
        let configured = match dataset {
            Dataset::Meteorological => &self.api.meteorological_url,
            Dataset::Hydrological => &self.api.hydrological_url,
        };
        let configured = configured.trim();
        if configured.is_empty() {
            dataset.default_url()
        } else {
            configured
        }
    }

    /// Sets the URL for `dataset`. Empty input reverts to the default;
    /// anything else must be a valid http(s) URL.
    pub fn update(&mut self, dataset: Dataset, input: &str) -> Result<(), ConfigError> {
        let input = input.trim();
        let value = if input.is_empty() {
            dataset.default_url().to_string()
        } else {
            validate_url(dataset.title(), input)?;
            input.to_string()
        };
        *self.url_slot(dataset) = value;
        Ok(())
    }

    /// Checks every configured URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dataset in Dataset::ALL {
            validate_url(dataset.title(), self.url(dataset))?;
        }
        Ok(())
    }

    /// Writes settings to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn url_slot(&mut self, dataset: Dataset) -> &mut String {
        match dataset {
            Dataset::Meteorological => &mut self.api.meteorological_url,
            Dataset::Hydrological => &mut self.api.hydrological_url,
        }
    }
}

/// Accepts absolute `http`/`https` URLs with a host.
pub fn validate_url(name: &'static str, url: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        name,
        url: url.to_string(),
    };

    let parsed = reqwest::Url::parse(url).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid());
    }
    Ok(())
}
