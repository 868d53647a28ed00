//! Shared test doubles: a scriptable transport and a counting data source.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use triage_dash_core::config::DashboardConfig;
use triage_dash_core::errors::SourceError;
use triage_dash_core::models::SourceKind;
use triage_dash_core::traits::{IDataSource, ITransport, Method, TransportRequest, TransportResponse};

pub const INTERVAL: Duration = Duration::from_secs(5);

/// Let spawned fetch tasks run to completion without advancing time.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap()
}

pub fn test_config() -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.poll_interval_ms = INTERVAL.as_millis() as u64;
    config.time_series.day_count = 3;
    config
}

// ── Transport ─────────────────────────────────────────────────────────────

type Handler = Arc<dyn Fn(&TransportRequest) -> Result<TransportResponse, SourceError> + Send + Sync>;

/// Transport answering from a swappable handler and recording every request.
pub struct MockTransport {
    handler: Mutex<Handler>,
    calls: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new(
        handler: impl Fn(&TransportRequest) -> Result<TransportResponse, SourceError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        let handler: Handler = Arc::new(handler);
        Arc::new(Self {
            handler: Mutex::new(handler),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_handler(
        &self,
        handler: impl Fn(&TransportRequest) -> Result<TransportResponse, SourceError> + Send + Sync + 'static,
    ) {
        *self.handler.lock().unwrap() = Arc::new(handler);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, kind: SourceKind) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|req| classify(req) == Some(kind))
            .count()
    }
}

#[async_trait]
impl ITransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, SourceError> {
        self.calls.lock().unwrap().push(request.clone());
        let handler = Arc::clone(&self.handler.lock().unwrap());
        handler(&request)
    }
}

/// Which source issued a request, judged by method, path and query name.
pub fn classify(request: &TransportRequest) -> Option<SourceKind> {
    match request.method {
        Method::Get if request.path.ends_with("/status") => Some(SourceKind::WorkflowStatus),
        Method::Get if request.path.ends_with("/failed") => Some(SourceKind::FailedWorkflows),
        Method::Post => {
            let query = request.body.as_ref()?.get("query")?.as_str()?;
            if query.contains("query GetStats") {
                Some(SourceKind::PrimaryStats)
            } else if query.contains("query GetTimeSeriesData") {
                Some(SourceKind::TimeSeries)
            } else {
                None
            }
        }
        _ => None,
    }
}

pub fn agg(count: u64) -> Value {
    json!({ "aggregate": { "count": count } })
}

pub fn graphql_ok(data: Value) -> TransportResponse {
    TransportResponse::ok(json!({ "data": data }))
}

pub fn graphql_errors(message: &str) -> TransportResponse {
    TransportResponse::ok(json!({ "data": null, "errors": [{ "message": message }, { "message": "second" }] }))
}

pub fn status(code: u16) -> TransportResponse {
    TransportResponse {
        status: code,
        body: Value::Null,
    }
}

/// Primary stats data for the reference scenario.
pub fn stats_data(triage_rows: Value) -> Value {
    json!({
        "files_enriched_aggregate": agg(100),
        "submitted_files": agg(80),
        "containers_processed": agg(6),
        "unviewed_files": agg(12),
        "findings_by_detector_0": agg(10),
        "findings_by_detector_1": agg(5),
        "findings_aggregate": agg(40),
        "yara_rules_aggregate": agg(3),
        "untriaged_findings": agg(40),
        "latest_triage_entries": triage_rows,
    })
}

pub fn time_series_data() -> Value {
    json!({
        "files_day_0": agg(4),
        "files_day_1": agg(0),
        "files_day_2": agg(9),
        "findings_day_1": agg(2),
    })
}

pub fn workflow_status_body() -> Value {
    json!({
        "active_workflows": 2,
        "queued_files": 17,
        "metrics": {
            "completed_count": 311,
            "processing_times": { "avg_seconds": 3.2, "p50_seconds": 2.0, "p90_seconds": 8.5, "max_seconds": 41.0 }
        },
        "active_details": [
            { "id": "a1b2c3d4e5f6", "status": "RUNNING", "filename": "creds.txt", "object_id": "o-1", "runtime_seconds": 1.25 },
            { "id": "ffeeddccbbaa", "status": "RUNNING" }
        ]
    })
}

pub fn failed_workflows_body() -> Value {
    json!({
        "failed_count": 1,
        "workflows": [
            { "id": "deadbeef0001", "status": "FAILED", "error": "worker timed out", "timestamp": "2024-03-10T14:59:00+00:00" }
        ]
    })
}

/// Healthy upstream for all four sources.
pub fn healthy(request: &TransportRequest) -> Result<TransportResponse, SourceError> {
    match classify(request) {
        Some(SourceKind::PrimaryStats) => Ok(graphql_ok(stats_data(json!([])))),
        Some(SourceKind::TimeSeries) => Ok(graphql_ok(time_series_data())),
        Some(SourceKind::WorkflowStatus) => Ok(TransportResponse::ok(workflow_status_body())),
        Some(SourceKind::FailedWorkflows) => Ok(TransportResponse::ok(failed_workflows_body())),
        None => Ok(status(404)),
    }
}

// ── Data source ───────────────────────────────────────────────────────────

/// Source returning its call number, or the next scripted result.
/// With a hold, each fetch waits for one semaphore permit before answering.
pub struct CountingSource {
    pub calls: Arc<AtomicU64>,
    script: Arc<Mutex<VecDeque<Result<u64, SourceError>>>>,
    hold: Option<Arc<Semaphore>>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicU64::new(0)),
            script: Arc::new(Mutex::new(VecDeque::new())),
            hold: None,
        }
    }

    pub fn scripted(results: Vec<Result<u64, SourceError>>) -> Self {
        let source = Self::new();
        source.script.lock().unwrap().extend(results);
        source
    }

    pub fn held(hold: Arc<Semaphore>) -> Self {
        Self {
            hold: Some(hold),
            ..Self::new()
        }
    }
}

#[async_trait]
impl IDataSource for CountingSource {
    type Output = u64;

    fn kind(&self) -> SourceKind {
        SourceKind::WorkflowStatus
    }

    async fn fetch(&self) -> Result<u64, SourceError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(hold) = &self.hold {
            hold.acquire().await.expect("hold semaphore closed").forget();
        }
        let scripted = self.script.lock().unwrap().pop_front();
        scripted.unwrap_or(Ok(n))
    }
}
