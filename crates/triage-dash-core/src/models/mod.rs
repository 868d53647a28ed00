mod metric_snapshot;
mod poll_state;
mod source_kind;
mod time_series;
mod triage;
mod workflow;

pub mod serde_helpers;

pub use metric_snapshot::MetricSnapshot;
pub use poll_state::{PageVisibility, PollState, SourceStatus};
pub use source_kind::SourceKind;
pub use time_series::{BucketAnchor, TimeBucket, TimeSeries, TimeSeriesMetric, TimeSeriesPoint};
pub use triage::{TriageCounts, TriageEntry, TriageStatus};
pub use workflow::{
    FailedWorkflowsSummary, ProcessingTimes, WorkflowMetrics, WorkflowRecord,
    WorkflowStatusSummary,
};
