//! DashboardOrchestrator: owns one poller per source and their lifecycle.
//!
//! All four pollers share the configured cadence but nothing else: each has
//! its own loop, its own state and its own failure domain. Page visibility
//! is broadcast on a watch channel; a hidden→visible transition refreshes
//! every source at once instead of waiting for the next tick.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::info;

use triage_dash_core::config::DashboardConfig;
use triage_dash_core::errors::{ConfigError, DashResult};
use triage_dash_core::models::{
    FailedWorkflowsSummary, MetricSnapshot, PageVisibility, PollState, SourceKind, TimeSeries,
    WorkflowStatusSummary,
};
use triage_dash_core::traits::{IClock, ITransport, SystemClock};

use crate::poller::{SourcePoller, SourceSnapshot};
use crate::sources::{
    FailedWorkflowsSource, PrimaryStatsSource, TimeSeriesSource, WorkflowStatusSource,
};
use crate::stats::StatsAggregator;
use crate::timeseries::TimeSeriesBucketer;
use crate::transport::HttpTransport;

/// A non-blocking warning for an optional source that is currently failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub source: SourceKind,
    pub message: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: {} unavailable: {}",
            self.source.display_name(),
            self.message
        )
    }
}

/// Point-in-time copy of every source, for the display layer.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: SourceSnapshot<MetricSnapshot>,
    pub workflow_status: SourceSnapshot<WorkflowStatusSummary>,
    pub failed_workflows: SourceSnapshot<FailedWorkflowsSummary>,
    pub time_series: SourceSnapshot<TimeSeries>,
    pub visibility: PageVisibility,
}

impl DashboardView {
    pub fn poll_state(&self, kind: SourceKind) -> &PollState {
        match kind {
            SourceKind::PrimaryStats => &self.stats.poll,
            SourceKind::WorkflowStatus => &self.workflow_status.poll,
            SourceKind::FailedWorkflows => &self.failed_workflows.poll,
            SourceKind::TimeSeries => &self.time_series.poll,
        }
    }

    /// Last successful primary refresh.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.stats.poll.last_success_at
    }

    /// Error of a required source; its section cannot render.
    pub fn blocking_error(&self) -> Option<(SourceKind, &str)> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| kind.is_required())
            .find_map(|kind| {
                self.poll_state(kind)
                    .last_error
                    .as_deref()
                    .map(|message| (kind, message))
            })
    }

    /// Errors of optional sources, rendered as warnings.
    pub fn advisories(&self) -> Vec<Advisory> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_required())
            .filter_map(|kind| {
                self.poll_state(kind).last_error.as_ref().map(|message| Advisory {
                    source: kind,
                    message: message.clone(),
                })
            })
            .collect()
    }

    /// True while any source has not completed its first fetch.
    pub fn any_loading(&self) -> bool {
        SourceKind::ALL
            .into_iter()
            .any(|kind| self.poll_state(kind).is_loading)
    }
}

/// Central orchestrator for the four dashboard sources.
///
/// Pollers stop when the orchestrator is dropped.
pub struct DashboardOrchestrator {
    config: DashboardConfig,
    stats: SourcePoller<PrimaryStatsSource>,
    workflow_status: SourcePoller<WorkflowStatusSource>,
    failed_workflows: SourcePoller<FailedWorkflowsSource>,
    time_series: SourcePoller<TimeSeriesSource>,
    visibility: watch::Sender<PageVisibility>,
}

impl DashboardOrchestrator {
    /// Build against the real HTTP transport described by `config.endpoints`.
    pub fn from_config(config: DashboardConfig) -> DashResult<Self> {
        let transport = Arc::new(HttpTransport::new(config.endpoints.clone())?);
        Ok(Self::new(config, transport)?)
    }

    pub fn new(config: DashboardConfig, transport: Arc<dyn ITransport>) -> Result<Self, ConfigError> {
        Self::with_clock(config, transport, Arc::new(SystemClock))
    }

    /// `clock` drives success stamps and the time-series anchor.
    pub fn with_clock(
        config: DashboardConfig,
        transport: Arc<dyn ITransport>,
        clock: Arc<dyn IClock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let endpoints = &config.endpoints;

        let stats = SourcePoller::with_clock(
            PrimaryStatsSource::new(
                Arc::clone(&transport),
                endpoints.graphql_path.clone(),
                StatsAggregator::from_config(&config.stats),
                Arc::clone(&clock),
            ),
            Arc::clone(&clock),
        );
        let workflow_status = SourcePoller::with_clock(
            WorkflowStatusSource::new(Arc::clone(&transport), endpoints.workflow_status_path.clone()),
            Arc::clone(&clock),
        );
        let failed_workflows = SourcePoller::with_clock(
            FailedWorkflowsSource::new(Arc::clone(&transport), endpoints.failed_workflows_path.clone()),
            Arc::clone(&clock),
        );
        let time_series = SourcePoller::with_clock(
            TimeSeriesSource::new(
                Arc::clone(&transport),
                endpoints.graphql_path.clone(),
                TimeSeriesBucketer::from_config(&config.time_series)?,
                Arc::clone(&clock),
            ),
            clock,
        );

        let (visibility, _) = watch::channel(PageVisibility::Visible);
        Ok(Self {
            config,
            stats,
            workflow_status,
            failed_workflows,
            time_series,
            visibility,
        })
    }

    /// Start every poller with the shared interval. Each fetches immediately.
    pub fn start(&mut self) {
        let interval = self.config.poll_interval();
        let gate = || {
            self.config
                .pause_when_hidden
                .then(|| self.visibility.subscribe())
        };
        let (g1, g2, g3, g4) = (gate(), gate(), gate(), gate());
        self.stats.start_gated(interval, g1);
        self.workflow_status.start_gated(interval, g2);
        self.failed_workflows.start_gated(interval, g3);
        self.time_series.start_gated(interval, g4);
        info!(
            interval_ms = self.config.poll_interval_ms,
            pause_when_hidden = self.config.pause_when_hidden,
            "dashboard polling started"
        );
    }

    /// Stop every poller. No timer survives this call.
    pub fn stop(&mut self) {
        self.stats.stop();
        self.workflow_status.stop();
        self.failed_workflows.stop();
        self.time_series.stop();
        info!("dashboard polling stopped");
    }

    pub fn is_running(&self) -> bool {
        self.stats.is_running()
            || self.workflow_status.is_running()
            || self.failed_workflows.is_running()
            || self.time_series.is_running()
    }

    /// Manual refresh: one out-of-band fetch per running source. Returns
    /// how many fetches were issued.
    pub fn refresh_all(&self) -> usize {
        [
            self.stats.trigger_now(),
            self.workflow_status.trigger_now(),
            self.failed_workflows.trigger_now(),
            self.time_series.trigger_now(),
        ]
        .into_iter()
        .filter(|issued| *issued)
        .count()
    }

    /// Record a visibility change. Becoming visible after being hidden
    /// refreshes every source immediately; returns whether it did.
    pub fn set_visibility(&self, visibility: PageVisibility) -> bool {
        let previous = self.visibility.send_replace(visibility);
        if previous == visibility {
            return false;
        }
        info!(from = ?previous, to = ?visibility, "page visibility changed");
        if previous == PageVisibility::Hidden && visibility == PageVisibility::Visible {
            return self.refresh_all() > 0;
        }
        false
    }

    pub fn visibility(&self) -> PageVisibility {
        *self.visibility.borrow()
    }

    pub fn subscribe_visibility(&self) -> watch::Receiver<PageVisibility> {
        self.visibility.subscribe()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            stats: self.stats.snapshot(),
            workflow_status: self.workflow_status.snapshot(),
            failed_workflows: self.failed_workflows.snapshot(),
            time_series: self.time_series.snapshot(),
            visibility: self.visibility(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn stats(&self) -> &SourcePoller<PrimaryStatsSource> {
        &self.stats
    }

    pub fn workflow_status(&self) -> &SourcePoller<WorkflowStatusSource> {
        &self.workflow_status
    }

    pub fn failed_workflows(&self) -> &SourcePoller<FailedWorkflowsSource> {
        &self.failed_workflows
    }

    pub fn time_series(&self) -> &SourcePoller<TimeSeriesSource> {
        &self.time_series
    }
}
