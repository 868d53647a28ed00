//! # triage-dash-engine
//!
//! Data acquisition and aggregation behind the triage dashboard.
//!
//! ## Modules
//! - `poller`: `SourcePoller`, one independent refresh loop per source
//! - `orchestrator`: `DashboardOrchestrator`, owns the four pollers and their lifecycle
//! - `sources`: the four `IDataSource` implementations
//! - `stats`: primary stats query and `MetricSnapshot` derivation
//! - `timeseries`: day buckets, batched aggregation query, response reduction
//! - `triage`: latest-per-finding triage reduction and tallies
//! - `graphql`: GraphQL envelope handling on top of `ITransport`
//! - `transport`: `reqwest`-backed `ITransport`

pub mod graphql;
pub mod orchestrator;
pub mod poller;
pub mod sources;
pub mod stats;
pub mod timeseries;
pub mod transport;
pub mod triage;

pub use orchestrator::{DashboardOrchestrator, DashboardView};
pub use poller::{SourcePoller, SourceSnapshot};
pub use timeseries::TimeSeriesBucketer;
pub use triage::TriageReducer;
