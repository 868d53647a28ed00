use chrono::{DateTime, Utc};

/// Source of "now" for success timestamps and bucket anchors.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl IClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
