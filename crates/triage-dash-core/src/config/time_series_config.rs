//! Trend chart configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::BucketAnchor;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesConfig {
    /// Number of one-day buckets, `1..=MAX_DAY_COUNT`.
    pub day_count: u32,
    pub anchor: BucketAnchor,
}

impl Default for TimeSeriesConfig {
    fn default() -> Self {
        Self {
            day_count: defaults::DAY_COUNT,
            anchor: BucketAnchor::default(),
        }
    }
}

impl TimeSeriesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=defaults::MAX_DAY_COUNT).contains(&self.day_count) {
            return Err(ConfigError::InvalidDayCount(self.day_count));
        }
        Ok(())
    }
}
