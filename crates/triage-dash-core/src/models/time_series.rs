//! Day-bucketed trend data.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where the newest bucket ends.
///
/// Bucket boundaries are calendar dates; the time of day of "now" never
/// affects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketAnchor {
    /// The last bucket ends (exclusive) at today's date, so it covers
    /// yesterday and the partial current day is left out.
    #[default]
    CompletedDays,
    /// The last bucket covers today, ending (exclusive) at tomorrow's date.
    ThroughToday,
}

/// One calendar-day interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl TimeBucket {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// The count metrics tracked over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSeriesMetric {
    /// Top-level (submitted) files created per day.
    Files,
    /// Findings created per day.
    Findings,
}

impl TimeSeriesMetric {
    pub const ALL: [TimeSeriesMetric; 2] = [Self::Files, Self::Findings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Findings => "findings",
        }
    }
}

impl fmt::Display for TimeSeriesMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub count: u64,
}

/// Reduced trend data: one point per bucket per metric, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub buckets: Vec<TimeBucket>,
    pub files: Vec<TimeSeriesPoint>,
    pub findings: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn points(&self, metric: TimeSeriesMetric) -> &[TimeSeriesPoint] {
        match metric {
            TimeSeriesMetric::Files => &self.files,
            TimeSeriesMetric::Findings => &self.findings,
        }
    }

    pub fn total(&self, metric: TimeSeriesMetric) -> u64 {
        self.points(metric).iter().map(|p| p.count).sum()
    }
}
