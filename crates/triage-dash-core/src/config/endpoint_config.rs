//! Upstream endpoint locations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Where the four sources are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub graphql_path: String,
    pub workflow_status_path: String,
    pub failed_workflows_path: String,
    /// Sent as `x-hasura-admin-secret` on GraphQL requests when set.
    pub admin_secret: Option<String>,
    pub request_timeout_ms: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            graphql_path: defaults::GRAPHQL_PATH.to_string(),
            workflow_status_path: defaults::WORKFLOW_STATUS_PATH.to_string(),
            failed_workflows_path: defaults::FAILED_WORKFLOWS_PATH.to_string(),
            admin_secret: None,
            request_timeout_ms: defaults::REQUEST_TIMEOUT_MS,
        }
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint {
                field: "base_url",
                reason: format!("expected an http(s) URL, got {:?}", self.base_url),
            });
        }
        for (field, path) in [
            ("graphql_path", &self.graphql_path),
            ("workflow_status_path", &self.workflow_status_path),
            ("failed_workflows_path", &self.failed_workflows_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidEndpoint {
                    field,
                    reason: format!("path must start with '/', got {:?}", path),
                });
            }
        }
        Ok(())
    }

    /// Join `base_url` and a configured path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
