//! Configuration System
//!
//! The dashboard ships with `dashboard.toml` embedded at compile time. The API
//! URL can be overridden at runtime through local storage.

use serde::Deserialize;

use crate::error::ConfigError;

/// Embedded configuration file
const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

/// Local storage key holding an API URL override
pub const API_URL_STORAGE_KEY: &str = "fatalities_api_url";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub chart: ChartStyle,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Grouped fatalities endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
}

fn default_api_url() -> String {
    "http://127.0.0.1:5000/api/grouped-fatalities".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

/// Look of the single line dataset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_dataset_label")]
    pub dataset_label: String,

    #[serde(default = "default_border_color")]
    pub border_color: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_border_width")]
    pub border_width: f64,

    #[serde(default = "default_fill")]
    pub fill: bool,
}

fn default_dataset_label() -> String {
    "Monthly Fatalities".to_string()
}

fn default_border_color() -> String {
    "rgba(75, 192, 192, 1)".to_string()
}

fn default_background_color() -> String {
    "rgba(75, 192, 192, 0.2)".to_string()
}

fn default_border_width() -> f64 {
    2.0
}

fn default_fill() -> bool {
    true
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            dataset_label: default_dataset_label(),
            border_color: default_border_color(),
            background_color: default_background_color(),
            border_width: default_border_width(),
            fill: default_fill(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            chart: ChartStyle::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.api.url = normalize_url(&config.api.url);
        Ok(config)
    }

    /// Load the embedded configuration
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Replace the API URL with the local storage override, if one is set
    pub fn with_storage_override(self) -> Self {
        self.with_api_override(stored_api_url())
    }

    /// Replace the API URL with `url` when one is given
    pub fn with_api_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
            let url = normalize_url(&url);
            log::info!(
                "API URL overridden by local storage key {}: {}",
                API_URL_STORAGE_KEY,
                url
            );
            self.api.url = url;
        }
        self
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the API URL override from local storage
pub fn stored_api_url() -> Option<String> {
    local_storage()?
        .get_item(API_URL_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|url| !url.trim().is_empty())
}
