//! Property tests for day buckets and batched aliases.

use std::collections::HashSet;

use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use proptest::prelude::*;

use triage_dash_core::models::{BucketAnchor, TimeSeriesMetric};
use triage_dash_engine::timeseries::buckets::anchor_date;
use triage_dash_engine::timeseries::query::alias;
use triage_dash_engine::TimeSeriesBucketer;

fn arb_now() -> impl Strategy<Value = DateTime<Utc>> {
    // 2000-01-01 through roughly 2060.
    (0i64..22_000, 0i64..86_400).prop_map(|(days, secs)| {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::seconds(secs)
    })
}

fn arb_anchor() -> impl Strategy<Value = BucketAnchor> {
    prop_oneof![
        Just(BucketAnchor::CompletedDays),
        Just(BucketAnchor::ThroughToday),
    ]
}

proptest! {
    #[test]
    fn prop_bucket_count_matches(days in 1u32..120, now in arb_now(), anchor in arb_anchor()) {
        let buckets = TimeSeriesBucketer::new(days, anchor).unwrap().buckets(now).unwrap();
        prop_assert_eq!(buckets.len(), days as usize);
    }

    #[test]
    fn prop_buckets_are_contiguous_single_days(days in 1u32..120, now in arb_now(), anchor in arb_anchor()) {
        let buckets = TimeSeriesBucketer::new(days, anchor).unwrap().buckets(now).unwrap();
        for bucket in &buckets {
            prop_assert_eq!(bucket.start.checked_add_days(Days::new(1)), Some(bucket.end));
        }
        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn prop_last_bucket_ends_at_anchor(days in 1u32..120, now in arb_now(), anchor in arb_anchor()) {
        let buckets = TimeSeriesBucketer::new(days, anchor).unwrap().buckets(now).unwrap();
        let last = buckets.last().unwrap();
        prop_assert_eq!(Some(last.end), anchor_date(now, anchor));
    }

    #[test]
    fn prop_each_date_in_at_most_one_bucket(days in 1u32..60, now in arb_now(), anchor in arb_anchor()) {
        let buckets = TimeSeriesBucketer::new(days, anchor).unwrap().buckets(now).unwrap();
        let first = buckets[0].start;
        let span = u64::from(days) + 2;
        for offset in 0..span {
            let Some(date) = first.checked_add_days(Days::new(offset)).and_then(|d| d.checked_sub_days(Days::new(1))) else {
                continue;
            };
            let holders = buckets.iter().filter(|b| b.contains(date)).count();
            prop_assert!(holders <= 1);
        }
    }

    #[test]
    fn prop_aliases_are_unique(days in 1usize..200) {
        let mut seen = HashSet::new();
        for metric in TimeSeriesMetric::ALL {
            for index in 0..days {
                prop_assert!(seen.insert(alias(metric, index)));
            }
        }
        prop_assert_eq!(seen.len(), days * 2);
    }
}
