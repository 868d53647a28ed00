//! Snapshot derivation from the primary stats response.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use triage_dash_core::config::StatsConfig;
use triage_dash_core::errors::SourceError;
use triage_dash_core::models::{MetricSnapshot, TriageEntry, TriageStatus};

use super::query::{self, build_stats_query, detector_alias};
use crate::graphql::{require_aggregate_count, GraphQLRequest};
use crate::triage::TriageReducer;

/// Builds the primary stats request and turns its `data` into a snapshot.
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    detectors: Vec<String>,
}

impl StatsAggregator {
    pub fn new(detectors: Vec<String>) -> Self {
        Self { detectors }
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self::new(config.detectors.clone())
    }

    pub fn detectors(&self) -> &[String] {
        &self.detectors
    }

    pub fn build_request(&self) -> GraphQLRequest {
        build_stats_query(&self.detectors)
    }

    /// Derive the snapshot in one piece. Any missing aggregate fails the
    /// whole derivation so a snapshot is never partially filled.
    pub fn derive(
        &self,
        data: &Map<String, Value>,
        captured_at: DateTime<Utc>,
    ) -> Result<MetricSnapshot, SourceError> {
        let mut findings_by_detector = BTreeMap::new();
        for (index, detector) in self.detectors.iter().enumerate() {
            let count = require_aggregate_count(data, &detector_alias(index))?;
            findings_by_detector.insert(detector.clone(), count);
        }

        let entries = triage_entries(data)?;
        let triage = TriageReducer::reduce(&entries);

        Ok(MetricSnapshot {
            total_files: require_aggregate_count(data, query::TOTAL_FILES)?,
            submitted_files: require_aggregate_count(data, query::SUBMITTED_FILES)?,
            containers_processed: require_aggregate_count(data, query::CONTAINERS_PROCESSED)?,
            unviewed_files: require_aggregate_count(data, query::UNVIEWED_FILES)?,
            total_findings: require_aggregate_count(data, query::TOTAL_FINDINGS)?,
            findings_by_detector,
            enabled_rules: require_aggregate_count(data, query::ENABLED_RULES)?,
            untriaged_findings: require_aggregate_count(data, query::UNTRIAGED_FINDINGS)?,
            true_positive_findings: triage.count(TriageStatus::TruePositive),
            false_positive_findings: triage.count(TriageStatus::FalsePositive),
            needs_review_findings: triage.count(TriageStatus::NeedsReview),
            captured_at,
        })
    }
}

/// Triage rows of the response; an absent or null list means no rows.
fn triage_entries(data: &Map<String, Value>) -> Result<Vec<TriageEntry>, SourceError> {
    match data.get(query::LATEST_TRIAGE_ENTRIES) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(rows) => Vec::<TriageEntry>::deserialize(rows)
            .map_err(|e| SourceError::Decode(format!("{}: {e}", query::LATEST_TRIAGE_ENTRIES))),
    }
}
