//! Batched aggregation query for all buckets and metrics.

use std::fmt::Write;

use triage_dash_core::models::{TimeBucket, TimeSeriesMetric};

use crate::graphql::GraphQLRequest;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Response key for one (metric, bucket) pair, e.g. `files_day_3`.
pub fn alias(metric: TimeSeriesMetric, index: usize) -> String {
    format!("{}_day_{}", metric.as_str(), index)
}

fn aggregate_field(metric: TimeSeriesMetric, bucket: &TimeBucket) -> String {
    let start = bucket.start.format(DATE_FORMAT);
    let end = bucket.end.format(DATE_FORMAT);
    match metric {
        TimeSeriesMetric::Files => format!(
            "files_enriched_aggregate(where: {{ created_at: {{ _gte: \"{start}\", _lt: \"{end}\" }}, \
             originating_object_id: {{ _is_null: true }} }}) {{ aggregate {{ count }} }}"
        ),
        TimeSeriesMetric::Findings => format!(
            "findings_aggregate(where: {{ created_at: {{ _gte: \"{start}\", _lt: \"{end}\" }} }}) \
             {{ aggregate {{ count }} }}"
        ),
    }
}

/// One request carrying `buckets.len() × 2` aliased aggregate sub-queries.
pub fn build_batch_query(buckets: &[TimeBucket]) -> GraphQLRequest {
    let mut query = String::from("query GetTimeSeriesData {\n");
    for metric in TimeSeriesMetric::ALL {
        for (index, bucket) in buckets.iter().enumerate() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                query,
                "  {}: {}",
                alias(metric, index),
                aggregate_field(metric, bucket)
            );
        }
    }
    query.push('}');
    GraphQLRequest::new(query)
}
