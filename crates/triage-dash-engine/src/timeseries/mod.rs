//! TimeSeriesBucketer: day buckets, one batched aggregation query, and the
//! reduction of its response into ordered points per metric.
//!
//! Every bucket × metric pair becomes one aliased sub-query of a single
//! GraphQL request, so a refresh is one round trip regardless of the day
//! count. Aliases are unique per pair, which is what makes the response
//! demultiplexable.

pub mod buckets;
pub mod query;
pub mod reduce;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use triage_dash_core::config::TimeSeriesConfig;
use triage_dash_core::errors::ConfigError;
use triage_dash_core::models::{BucketAnchor, TimeBucket, TimeSeries};

use crate::graphql::GraphQLRequest;

/// Validated bucketing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSeriesBucketer {
    day_count: u32,
    anchor: BucketAnchor,
}

impl TimeSeriesBucketer {
    pub fn new(day_count: u32, anchor: BucketAnchor) -> Result<Self, ConfigError> {
        TimeSeriesConfig { day_count, anchor }.validate()?;
        Ok(Self { day_count, anchor })
    }

    pub fn from_config(config: &TimeSeriesConfig) -> Result<Self, ConfigError> {
        Self::new(config.day_count, config.anchor)
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn anchor(&self) -> BucketAnchor {
        self.anchor
    }

    /// Buckets for the cycle anchored at `now`, oldest first.
    pub fn buckets(&self, now: DateTime<Utc>) -> Result<Vec<TimeBucket>, ConfigError> {
        buckets::compute_buckets(self.day_count, now, self.anchor)
    }

    pub fn build_request(&self, buckets: &[TimeBucket]) -> GraphQLRequest {
        query::build_batch_query(buckets)
    }

    pub fn reduce(&self, buckets: &[TimeBucket], data: &Map<String, Value>) -> TimeSeries {
        reduce::reduce_batch(buckets, data)
    }
}
