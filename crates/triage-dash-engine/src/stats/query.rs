//! Primary stats GraphQL query.

use std::fmt::Write;

use crate::graphql::GraphQLRequest;

pub const TOTAL_FILES: &str = "files_enriched_aggregate";
pub const SUBMITTED_FILES: &str = "submitted_files";
pub const CONTAINERS_PROCESSED: &str = "containers_processed";
pub const UNVIEWED_FILES: &str = "unviewed_files";
pub const TOTAL_FINDINGS: &str = "findings_aggregate";
pub const ENABLED_RULES: &str = "yara_rules_aggregate";
pub const UNTRIAGED_FINDINGS: &str = "untriaged_findings";
pub const LATEST_TRIAGE_ENTRIES: &str = "latest_triage_entries";

/// Response key for the i-th configured detector.
pub fn detector_alias(index: usize) -> String {
    format!("findings_by_detector_{index}")
}

const FIXED_FIELDS: &str = r#"
  files_enriched_aggregate { aggregate { count } }
  submitted_files: files_enriched_aggregate(
    where: { originating_object_id: { _is_null: true } }
  ) { aggregate { count } }
  containers_processed: files_enriched_aggregate(
    where: { is_container: { _eq: true } }
  ) { aggregate { count } }
  unviewed_files: files_enriched_aggregate(
    where: {
      _and: [
        {
          _or: [
            { originating_object_id: { _is_null: true } },
            {
              _and: [
                { originating_object_id: { _is_null: false } },
                { nesting_level: { _is_null: false } },
                { nesting_level: { _gt: 0 } }
              ]
            }
          ]
        },
        { _not: { files_view_histories: {} } }
      ]
    }
  ) { aggregate { count } }
  findings_aggregate { aggregate { count } }
  yara_rules_aggregate(where: { enabled: { _eq: true } }) { aggregate { count } }
  untriaged_findings: findings_aggregate(
    where: { _not: { finding_triage_histories: {} } }
  ) { aggregate { count } }
  latest_triage_entries: findings_triage_history(
    distinct_on: finding_id
    order_by: [{ finding_id: asc }, { timestamp: desc }]
  ) {
    id
    finding_id
    value
    timestamp
  }
"#;

/// Build the combined primary stats query, one aliased finding count per
/// detector origin.
pub fn build_stats_query(detectors: &[String]) -> GraphQLRequest {
    let mut query = String::from("query GetStats {");
    query.push_str(FIXED_FIELDS);
    for (index, detector) in detectors.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            query,
            "  {}: findings_aggregate(where: {{ origin_name: {{ _eq: {} }} }}) {{ aggregate {{ count }} }}",
            detector_alias(index),
            graphql_string(detector)
        );
    }
    query.push('}');
    GraphQLRequest::new(query)
}

/// Quote a value as a GraphQL string literal.
fn graphql_string(value: &str) -> String {
    // JSON string escaping is a subset GraphQL accepts.
    serde_json::Value::String(value.to_string()).to_string()
}
