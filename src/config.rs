//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::market::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_LIMIT};
use crate::render::{ChartSize, RenderOptions};
use crate::view::DisplayOptions;

/// Largest `limit` the price API accepts
const MAX_LIMIT: usize = 100;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Price API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Refresh schedule
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

fn default_interval() -> u64 {
    60 // 1 minute
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
        }
    }
}

/// Terminal page options
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub show_stale_on_error: bool,

    #[serde(default = "default_chart_height")]
    pub chart_height: usize,

    #[serde(default = "default_chart_spacing")]
    pub chart_spacing: usize,
}

fn default_chart_height() -> usize {
    10
}

fn default_chart_spacing() -> usize {
    8
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_stale_on_error: false,
            chart_height: default_chart_height(),
            chart_spacing: default_chart_spacing(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("coinwatch").join("config.toml"))
            .into_iter()
            .chain([
                PathBuf::from("/etc/coinwatch/config.toml"),
                PathBuf::from("./config.toml"),
            ])
            .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> DefaultLoad {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file in `paths` that parses.
    ///
    /// Files that exist but fail to load are skipped and reported in
    /// [`DefaultLoad::errors`]; logging is usually not set up yet.
    pub fn load_first(paths: &[PathBuf]) -> DefaultLoad {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return DefaultLoad {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        DefaultLoad {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any `COINWATCH_*` lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup("COINWATCH_API_ENDPOINT") {
            self.api.endpoint = endpoint;
        }
        if let Some(limit) = lookup("COINWATCH_API_LIMIT").and_then(|v| v.parse().ok()) {
            self.api.limit = limit;
        }
        if let Some(secs) = lookup("COINWATCH_POLL_INTERVAL_SECS").and_then(|v| v.parse().ok()) {
            self.polling.interval_secs = secs;
        }
        if let Some(level) = lookup("COINWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("COINWATCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// HTTP client settings, with the limit clamped to what the API accepts
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.api.endpoint.trim_end_matches('/').to_string(),
            limit: self.api.limit.clamp(1, MAX_LIMIT),
            request_timeout: Duration::from_secs(self.api.request_timeout_secs.max(1)),
        }
    }

    /// Poll interval, at least one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_secs.max(1))
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_stale_on_error: self.display.show_stale_on_error,
            limit: self.api.limit.clamp(1, MAX_LIMIT),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            chart: ChartSize {
                height: self.display.chart_height,
                spacing: self.display.chart_spacing,
            }
            .bounded(),
        }
    }
}

/// Outcome of [`Config::load_default`]
#[derive(Debug)]
pub struct DefaultLoad {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub errors: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Coinwatch Configuration
#
# Environment variables override these settings:
# - COINWATCH_API_ENDPOINT
# - COINWATCH_API_LIMIT
# - COINWATCH_POLL_INTERVAL_SECS
# - COINWATCH_LOG_LEVEL
# - COINWATCH_LOG_FORMAT

[api]
# Asset listing endpoint (the `limit` query parameter is added)
endpoint = "https://api.coincap.io/v2/assets"

# Number of assets to list (1-100)
limit = 10

# Request timeout in seconds
request_timeout_secs = 10

[polling]
# How often to refresh prices (seconds)
interval_secs = 60

[display]
# Keep showing the last good list when a refresh fails
show_stale_on_error = false

# Chart size in terminal rows, and columns between points
chart_height = 10
chart_spacing = 8

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
