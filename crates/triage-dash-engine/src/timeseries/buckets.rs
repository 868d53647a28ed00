//! Calendar-day bucket boundaries.

use chrono::{DateTime, Days, NaiveDate, Utc};

use triage_dash_core::errors::ConfigError;
use triage_dash_core::models::{BucketAnchor, TimeBucket};

/// Label format for a bucket, e.g. `Oct 19`.
pub const LABEL_FORMAT: &str = "%b %-d";

/// Exclusive end date of the newest bucket.
pub fn anchor_date(now: DateTime<Utc>, anchor: BucketAnchor) -> Option<NaiveDate> {
    let today = now.date_naive();
    match anchor {
        BucketAnchor::CompletedDays => Some(today),
        BucketAnchor::ThroughToday => today.checked_add_days(Days::new(1)),
    }
}

/// Compute `day_count` contiguous half-open one-day buckets.
///
/// Bucket `i` covers `[anchor - (N - i), anchor - (N - i - 1))` days. Only
/// the UTC date of `now` is used, so the result is the same at 00:01 and
/// 23:59 of a given day.
pub fn compute_buckets(
    day_count: u32,
    now: DateTime<Utc>,
    anchor: BucketAnchor,
) -> Result<Vec<TimeBucket>, ConfigError> {
    if day_count == 0 {
        return Err(ConfigError::InvalidDayCount(day_count));
    }
    let out_of_range = || ConfigError::DateOutOfRange {
        day_count,
        anchor: now.date_naive().to_string(),
    };

    let end = anchor_date(now, anchor).ok_or_else(out_of_range)?;
    let mut start = end
        .checked_sub_days(Days::new(u64::from(day_count)))
        .ok_or_else(out_of_range)?;

    let mut buckets = Vec::with_capacity(day_count as usize);
    for _ in 0..day_count {
        let next = start.checked_add_days(Days::new(1)).ok_or_else(out_of_range)?;
        buckets.push(TimeBucket {
            start,
            end: next,
            label: start.format(LABEL_FORMAT).to_string(),
        });
        start = next;
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn completed_days_end_at_today() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 15, 45, 0).unwrap();
        let buckets = compute_buckets(3, now, BucketAnchor::CompletedDays).unwrap();
        let ranges: Vec<_> = buckets.iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(
            ranges,
            vec![
                (date(2024, 2, 28), date(2024, 2, 29)),
                (date(2024, 2, 29), date(2024, 3, 1)),
                (date(2024, 3, 1), date(2024, 3, 2)),
            ]
        );
        assert_eq!(buckets[1].label, "Feb 29");
    }

    #[test]
    fn through_today_includes_current_day() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 1).unwrap();
        let buckets = compute_buckets(2, now, BucketAnchor::ThroughToday).unwrap();
        assert_eq!(buckets[1].start, date(2024, 12, 31));
        assert_eq!(buckets[1].end, date(2025, 1, 1));
        assert_eq!(buckets[1].label, "Dec 31");
    }

    #[test]
    fn time_of_day_is_ignored() {
        let early = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 10, 23, 59, 59).unwrap();
        assert_eq!(
            compute_buckets(5, early, BucketAnchor::CompletedDays).unwrap(),
            compute_buckets(5, late, BucketAnchor::CompletedDays).unwrap()
        );
    }

    #[test]
    fn zero_days_rejected() {
        let now = Utc::now();
        assert!(matches!(
            compute_buckets(0, now, BucketAnchor::CompletedDays),
            Err(ConfigError::InvalidDayCount(0))
        ));
    }
}
