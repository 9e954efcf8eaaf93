// Configuration
// TOML configuration for the analytics service connection and forecast defaults

use crate::analytics::{DEFAULT_HORIZON, MAX_HORIZON};
use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the service base URL
pub const API_URL_ENV: &str = "SCANLENS_API_URL";

/// Analytics service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the analytics service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Attempts per request before giving up
    pub max_retries: u32,
}

/// Forecast defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of points projected past the last scan
    pub horizon: i64,
}

/// Full configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub forecast: ForecastConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON as i64,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| AnalyticsError::FileSystem {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply the environment override
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.override_base_url(Some(url));
        }

        Ok(config)
    }

    /// Replace the base URL with a non-empty value (env var or --api-url)
    pub fn override_base_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|u| !u.trim().is_empty()) {
            self.service.base_url = url.trim().to_string();
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        if self.service.base_url.trim().is_empty() {
            return Err(AnalyticsError::Config {
                message: "service.base_url must not be empty".to_string(),
            });
        }
        if self.service.max_retries == 0 {
            return Err(AnalyticsError::Config {
                message: "service.max_retries must be at least 1".to_string(),
            });
        }
        if self.forecast.horizon <= 0 || self.forecast.horizon > MAX_HORIZON as i64 {
            return Err(AnalyticsError::Config {
                message: format!(
                    "forecast.horizon must be between 1 and {}, got {}",
                    MAX_HORIZON, self.forecast.horizon
                ),
            });
        }
        Ok(())
    }

    /// Create example configuration file
    pub fn create_example_config(path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        let example = r#"[service]
# Base URL of the analytics service (overridden by SCANLENS_API_URL)
base_url = "http://127.0.0.1:8000"
# Request timeout in seconds
timeout_seconds = 30
# Attempts per request (server errors and rate limits are retried)
max_retries = 3

[forecast]
# Points projected past the latest scan (1-365)
horizon = 5
"#;

        std::fs::write(path, example).map_err(|e| AnalyticsError::FileSystem {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}
