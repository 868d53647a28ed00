//! Demultiplex a batched response back into per-metric points.

use serde_json::{Map, Value};

use triage_dash_core::models::{TimeBucket, TimeSeries, TimeSeriesMetric, TimeSeriesPoint};

use super::query::alias;
use crate::graphql::aggregate_count;

/// Build one point per bucket per metric, in bucket order. A missing or
/// malformed entry counts as 0; a partial response never fails.
pub fn reduce_batch(buckets: &[TimeBucket], data: &Map<String, Value>) -> TimeSeries {
    let points = |metric: TimeSeriesMetric| -> Vec<TimeSeriesPoint> {
        buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| TimeSeriesPoint {
                label: bucket.label.clone(),
                count: aggregate_count(data, &alias(metric, index)).unwrap_or(0),
            })
            .collect()
    };

    TimeSeries {
        files: points(TimeSeriesMetric::Files),
        findings: points(TimeSeriesMetric::Findings),
        buckets: buckets.to_vec(),
    }
}
