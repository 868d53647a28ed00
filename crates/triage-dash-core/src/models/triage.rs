//! Triage history rows and the per-status tallies derived from them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{id_string, lenient_timestamp};

/// One row of a finding's triage history.
///
/// An entity may have many rows; only the one with the latest timestamp is
/// its current disposition. Entities with no rows are untriaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageEntry {
    #[serde(rename = "finding_id", deserialize_with = "id_string")]
    pub entity_id: String,
    #[serde(rename = "value", default)]
    pub status: Option<String>,
    #[serde(default, with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    /// History row id, used only to break timestamp ties.
    #[serde(rename = "id", default)]
    pub row_id: Option<i64>,
}

impl TriageEntry {
    pub fn new(
        entity_id: impl Into<String>,
        status: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            status: Some(status.into()),
            timestamp: Some(timestamp),
            row_id: None,
        }
    }

    pub fn with_row_id(mut self, row_id: i64) -> Self {
        self.row_id = Some(row_id);
        self
    }
}

/// The recognised triage dispositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageStatus {
    TruePositive,
    FalsePositive,
    NeedsReview,
}

impl TriageStatus {
    pub const ALL: [TriageStatus; 3] = [Self::TruePositive, Self::FalsePositive, Self::NeedsReview];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TruePositive => "true_positive",
            Self::FalsePositive => "false_positive",
            Self::NeedsReview => "needs_review",
        }
    }

    /// Map a raw history value onto a known status.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for TriageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occurrence count per raw status value.
///
/// Unrecognised values are kept so callers can inspect them; the snapshot
/// only reads the three known statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageCounts(BTreeMap<String, u64>);

impl TriageCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, value: &str) {
        *self.0.entry(value.to_string()).or_insert(0) += 1;
    }

    /// Count for a raw value, 0 if never seen.
    pub fn get(&self, value: &str) -> u64 {
        self.0.get(value).copied().unwrap_or(0)
    }

    pub fn count(&self, status: TriageStatus) -> u64 {
        self.get(status.as_str())
    }

    /// Sum over every value, recognised or not.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.0
    }
}

impl FromIterator<(String, u64)> for TriageCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
