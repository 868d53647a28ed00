use std::fmt;

use serde::{Deserialize, Serialize};

/// The independently polled sources behind the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    PrimaryStats,
    WorkflowStatus,
    FailedWorkflows,
    TimeSeries,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        Self::PrimaryStats,
        Self::WorkflowStatus,
        Self::FailedWorkflows,
        Self::TimeSeries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryStats => "primary_stats",
            Self::WorkflowStatus => "workflow_status",
            Self::FailedWorkflows => "failed_workflows",
            Self::TimeSeries => "time_series",
        }
    }

    /// Required sources block their section on error; the rest only warn.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::PrimaryStats)
    }

    /// Human-readable name used in advisory messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PrimaryStats => "Statistics",
            Self::WorkflowStatus => "Enrichment service metrics",
            Self::FailedWorkflows => "Failed workflows information",
            Self::TimeSeries => "Time series data",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
