//! Property tests for the triage reduction.

use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use triage_dash_core::models::{TriageEntry, TriageStatus};
use triage_dash_engine::TriageReducer;

fn arb_entry() -> impl Strategy<Value = TriageEntry> {
    (
        0u8..20,
        prop::sample::select(TriageStatus::ALL.to_vec()),
        0i64..1_000,
        0i64..50,
    )
        .prop_map(|(entity, status, minutes, row)| {
            let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
            TriageEntry::new(format!("f-{entity}"), status.as_str(), at).with_row_id(row)
        })
}

proptest! {
    #[test]
    fn prop_one_entry_per_entity(entries in prop::collection::vec(arb_entry(), 0..100)) {
        let latest = TriageReducer::latest_per_entity(&entries);
        let entities: HashSet<_> = entries.iter().map(|e| e.entity_id.as_str()).collect();
        prop_assert_eq!(latest.len(), entities.len());
        let counts = TriageReducer::reduce(&entries);
        prop_assert_eq!(counts.total(), entities.len() as u64);
    }

    #[test]
    fn prop_reduction_ignores_input_order(entries in prop::collection::vec(arb_entry(), 0..60)) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(TriageReducer::reduce(&entries), TriageReducer::reduce(&reversed));
    }

    #[test]
    fn prop_latest_is_never_older(entries in prop::collection::vec(arb_entry(), 1..60)) {
        for kept in TriageReducer::latest_per_entity(&entries) {
            for other in entries.iter().filter(|e| e.entity_id == kept.entity_id) {
                prop_assert!(other.timestamp <= kept.timestamp);
            }
        }
    }
}
