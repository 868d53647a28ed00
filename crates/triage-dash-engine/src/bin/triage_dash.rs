//! triage-dash: run the dashboard pollers headless and log a summary line
//! per refresh interval.
//!
//! Usage: `triage-dash [config.toml]`. Log level comes from `RUST_LOG`.

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use triage_dash_core::config::DashboardConfig;
use triage_dash_core::models::TimeSeriesMetric;
use triage_dash_engine::{DashboardOrchestrator, DashboardView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => DashboardConfig::default(),
    };
    config.apply_env_overrides();

    let mut orchestrator = DashboardOrchestrator::from_config(config)?;
    orchestrator.start();

    let mut ticker = tokio::time::interval(orchestrator.config().poll_interval());
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = ticker.tick() => log_view(&orchestrator.view()),
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    error!(error = %e, "failed to listen for ctrl-c");
                }
                break;
            }
        }
    }

    orchestrator.stop();
    Ok(())
}

fn log_view(view: &DashboardView) {
    if let Some((source, message)) = view.blocking_error() {
        error!(%source, error = message, "required source unavailable");
    }
    for advisory in view.advisories() {
        warn!("{advisory}");
    }

    if let Some(stats) = view.stats.data.as_deref() {
        info!(
            files = stats.total_files,
            submitted = stats.submitted_files,
            unviewed = stats.unviewed_files,
            findings = stats.total_findings,
            untriaged = stats.untriaged_findings,
            true_positive = stats.true_positive_findings,
            false_positive = stats.false_positive_findings,
            needs_review = stats.needs_review_findings,
            "stats"
        );
    }
    if let Some(workflows) = view.workflow_status.data.as_deref() {
        info!(
            active = workflows.active_workflows,
            queued = workflows.queued_files,
            completed = workflows.metrics.completed_count,
            "workflows"
        );
    }
    if let Some(failed) = view.failed_workflows.data.as_deref() {
        info!(failed = failed.failed_count, "failed workflows");
    }
    if let Some(series) = view.time_series.data.as_deref() {
        info!(
            days = series.buckets.len(),
            files = series.total(TimeSeriesMetric::Files),
            findings = series.total(TimeSeriesMetric::Findings),
            "trend totals"
        );
    }
    match view.last_updated() {
        Some(at) => info!(last_updated = %at.format("%H:%M:%S"), "refreshed"),
        None => info!("updating..."),
    }
}
