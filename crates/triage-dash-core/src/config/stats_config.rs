use serde::{Deserialize, Serialize};

use super::defaults;

/// Primary stats query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Detector origins whose findings are counted separately, in display order.
    pub detectors: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            detectors: defaults::DETECTORS.iter().map(|d| d.to_string()).collect(),
        }
    }
}
