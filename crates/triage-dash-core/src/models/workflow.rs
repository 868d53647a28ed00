//! Workflow status payloads from the workflow REST endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{id_string, lenient_timestamp};

/// One enrichment workflow, either currently active or recently failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub runtime_seconds: Option<f64>,
    #[serde(rename = "error", default)]
    pub error_message: Option<String>,
    #[serde(default, with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl WorkflowRecord {
    /// First eight characters of the id, as shown in listings.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Processing-time distribution of completed workflows, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingTimes {
    pub avg_seconds: f64,
    pub p50_seconds: f64,
    pub p90_seconds: f64,
    pub max_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowMetrics {
    pub completed_count: u64,
    pub processing_times: Option<ProcessingTimes>,
}

/// Response of the workflow-status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowStatusSummary {
    pub active_workflows: u64,
    pub queued_files: u64,
    pub metrics: WorkflowMetrics,
    pub active_details: Vec<WorkflowRecord>,
}

/// Response of the failed-workflows endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailedWorkflowsSummary {
    pub failed_count: u64,
    pub workflows: Vec<WorkflowRecord>,
}

impl FailedWorkflowsSummary {
    /// The first `limit` failures plus how many were left out.
    pub fn head(&self, limit: usize) -> (&[WorkflowRecord], usize) {
        let shown = self.workflows.len().min(limit);
        (&self.workflows[..shown], self.workflows.len() - shown)
    }
}
