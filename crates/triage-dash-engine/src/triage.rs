//! TriageReducer: current disposition per finding, tallied per status.
//!
//! Input rows are flat and unordered, possibly several per finding. Even
//! when the upstream query already collapses them with `distinct_on`, the
//! rows are re-reduced here so a duplicate never inflates a count.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use triage_dash_core::models::{TriageCounts, TriageEntry};

/// Stateless reducer over triage history rows.
pub struct TriageReducer;

impl TriageReducer {
    /// Keep one row per entity: the most recent one.
    ///
    /// Ties are broken by recency key `(timestamp, row_id, status)`, larger
    /// wins. A missing timestamp or row id ranks below any present value.
    /// Output is ordered by entity id.
    pub fn latest_per_entity(entries: &[TriageEntry]) -> Vec<&TriageEntry> {
        let mut latest: BTreeMap<&str, &TriageEntry> = BTreeMap::new();
        for entry in entries {
            match latest.entry(entry.entity_id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(mut slot) => {
                    if recency_key(entry) > recency_key(slot.get()) {
                        slot.insert(entry);
                    }
                }
            }
        }
        latest.into_values().collect()
    }

    /// Count rows per status value in one pass. Rows without a value are
    /// skipped; they stay in the untriaged total computed upstream.
    pub fn tally<'a>(entries: impl IntoIterator<Item = &'a TriageEntry>) -> TriageCounts {
        let mut counts = TriageCounts::new();
        for status in entries.into_iter().filter_map(|e| e.status.as_deref()) {
            counts.increment(status);
        }
        counts
    }

    /// Deduplicate to latest-per-entity, then tally.
    pub fn reduce(entries: &[TriageEntry]) -> TriageCounts {
        Self::tally(Self::latest_per_entity(entries))
    }
}

fn recency_key(entry: &TriageEntry) -> (Option<DateTime<Utc>>, Option<i64>, Option<&str>) {
    (entry.timestamp, entry.row_id, entry.status.as_deref())
}
