//! StatsAggregator: the primary stats query and the `MetricSnapshot`
//! derived from it.

pub mod aggregate;
pub mod query;

pub use aggregate::StatsAggregator;
