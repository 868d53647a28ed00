//! Derived counts from one successful primary stats poll.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TriageStatus;

/// Immutable record of the primary dashboard counters.
///
/// Built in one piece from a single response; a failed poll never produces
/// a partially filled snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub total_files: u64,
    /// Top-level files (no originating object).
    pub submitted_files: u64,
    pub containers_processed: u64,
    pub unviewed_files: u64,
    pub total_findings: u64,
    /// Finding count per detector origin, keyed by origin name.
    pub findings_by_detector: BTreeMap<String, u64>,
    pub enabled_rules: u64,
    pub untriaged_findings: u64,
    pub true_positive_findings: u64,
    pub false_positive_findings: u64,
    pub needs_review_findings: u64,
    pub captured_at: DateTime<Utc>,
}

impl MetricSnapshot {
    /// Finding count for one detector origin, 0 if it was not queried.
    pub fn detector_count(&self, detector: &str) -> u64 {
        self.findings_by_detector.get(detector).copied().unwrap_or(0)
    }

    pub fn triage_count(&self, status: TriageStatus) -> u64 {
        match status {
            TriageStatus::TruePositive => self.true_positive_findings,
            TriageStatus::FalsePositive => self.false_positive_findings,
            TriageStatus::NeedsReview => self.needs_review_findings,
        }
    }

    /// Findings with a current disposition of any recognised kind.
    pub fn triaged_findings(&self) -> u64 {
        self.true_positive_findings + self.false_positive_findings + self.needs_review_findings
    }
}
