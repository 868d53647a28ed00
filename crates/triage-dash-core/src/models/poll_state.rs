//! Per-source polling lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of one polled source.
///
/// `Idle → Loading → {Ready, Errored}`; after the first result a source moves
/// freely between `Ready` and `Errored` and never returns to `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

/// Loading/error bookkeeping for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollState {
    /// True until the first fetch attempt completes.
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub last_success_at: Option<DateTime<Utc>>,
    pub status: SourceStatus,
}

impl Default for PollState {
    fn default() -> Self {
        Self {
            is_loading: true,
            last_error: None,
            last_success_at: None,
            status: SourceStatus::Idle,
        }
    }
}

impl PollState {
    /// Poller loop started; only meaningful before the first result.
    pub fn mark_started(&mut self) {
        if self.status == SourceStatus::Idle {
            self.status = SourceStatus::Loading;
        }
    }

    pub fn record_success(&mut self, at: DateTime<Utc>) {
        self.is_loading = false;
        self.last_error = None;
        self.last_success_at = Some(at);
        self.status = SourceStatus::Ready;
    }

    pub fn record_failure(&mut self, message: String) {
        self.is_loading = false;
        self.last_error = Some(message);
        self.status = SourceStatus::Errored;
    }

    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }
}

/// Page visibility as reported by the display layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageVisibility {
    #[default]
    Visible,
    Hidden,
}

impl PageVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}
