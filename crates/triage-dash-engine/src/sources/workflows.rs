//! REST-backed workflow sources.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use triage_dash_core::errors::SourceError;
use triage_dash_core::models::{FailedWorkflowsSummary, SourceKind, WorkflowStatusSummary};
use triage_dash_core::traits::{IDataSource, ITransport, TransportRequest};

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn ITransport,
    path: &str,
) -> Result<T, SourceError> {
    let response = transport.send(TransportRequest::get(path)).await?;
    if !response.is_success() {
        return Err(SourceError::Protocol {
            status: response.status,
        });
    }
    Ok(serde_json::from_value(response.body)?)
}

/// Optional source: active/queued/completed counts and active workflows.
pub struct WorkflowStatusSource {
    transport: Arc<dyn ITransport>,
    path: String,
}

impl WorkflowStatusSource {
    pub fn new(transport: Arc<dyn ITransport>, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }
}

#[async_trait]
impl IDataSource for WorkflowStatusSource {
    type Output = WorkflowStatusSummary;

    fn kind(&self) -> SourceKind {
        SourceKind::WorkflowStatus
    }

    async fn fetch(&self) -> Result<WorkflowStatusSummary, SourceError> {
        get_json(self.transport.as_ref(), &self.path).await
    }
}

/// Optional source: recently failed workflows.
pub struct FailedWorkflowsSource {
    transport: Arc<dyn ITransport>,
    path: String,
}

impl FailedWorkflowsSource {
    pub fn new(transport: Arc<dyn ITransport>, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }
}

#[async_trait]
impl IDataSource for FailedWorkflowsSource {
    type Output = FailedWorkflowsSummary;

    fn kind(&self) -> SourceKind {
        SourceKind::FailedWorkflows
    }

    async fn fetch(&self) -> Result<FailedWorkflowsSummary, SourceError> {
        get_json(self.transport.as_ref(), &self.path).await
    }
}
