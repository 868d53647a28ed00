//! The four `IDataSource` implementations behind the dashboard.
//!
//! Each source owns its own transport handle and request parameters and
//! shares nothing mutable with its siblings.

mod primary_stats;
mod time_series;
mod workflows;

pub use primary_stats::PrimaryStatsSource;
pub use time_series::TimeSeriesSource;
pub use workflows::{get_json, FailedWorkflowsSource, WorkflowStatusSource};
