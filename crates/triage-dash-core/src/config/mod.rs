pub mod defaults;
pub mod endpoint_config;
pub mod stats_config;
pub mod time_series_config;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, DashResult};

pub use endpoint_config::EndpointConfig;
pub use stats_config::StatsConfig;
pub use time_series_config::TimeSeriesConfig;

/// Environment variable that overrides `endpoints.admin_secret`.
pub const ADMIN_SECRET_ENV: &str = "TRIAGE_DASH_ADMIN_SECRET";

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Shared refresh cadence for every source, in milliseconds.
    pub poll_interval_ms: u64,
    /// Skip interval ticks while the page is hidden. Visibility regain
    /// always triggers an immediate refresh regardless of this flag.
    pub pause_when_hidden: bool,
    pub endpoints: EndpointConfig,
    pub time_series: TimeSeriesConfig,
    pub stats: StatsConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: defaults::POLL_INTERVAL_MS,
            pause_when_hidden: false,
            endpoints: EndpointConfig::default(),
            time_series: TimeSeriesConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load config from a TOML string, falling back to defaults for missing
    /// fields, and validate the result.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> DashResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&raw)?)
    }

    /// Apply environment overrides (currently only the admin secret).
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var(ADMIN_SECRET_ENV) {
            if !secret.is_empty() {
                self.endpoints.admin_secret = Some(secret);
            }
        }
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        self.time_series.validate()?;
        self.endpoints.validate()?;
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
