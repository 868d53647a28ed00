//! `reqwest`-backed transport to the query service and workflow API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use triage_dash_core::config::EndpointConfig;
use triage_dash_core::errors::{DashError, DashResult, SourceError};
use triage_dash_core::traits::{ITransport, Method, TransportRequest, TransportResponse};

const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// HTTP client for all four sources.
///
/// The admin secret header is attached to POST requests only; the workflow
/// endpoints are plain GETs.
pub struct HttpTransport {
    client: Client,
    endpoints: EndpointConfig,
}

impl HttpTransport {
    pub fn new(endpoints: EndpointConfig) -> DashResult<Self> {
        let client = Client::builder()
            .timeout(endpoints.request_timeout())
            .build()
            .map_err(|e| DashError::TransportSetup(e.to_string()))?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }
}

#[async_trait]
impl ITransport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, SourceError> {
        let url = self.endpoints.url(&request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => {
                let mut builder = self.client.post(&url);
                if let Some(secret) = &self.endpoints.admin_secret {
                    builder = builder.header(ADMIN_SECRET_HEADER, secret);
                }
                match &request.body {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        debug!(%url, status, "upstream responded");

        if !response.status().is_success() {
            return Ok(TransportResponse {
                status,
                body: Value::Null,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(TransportResponse { status, body })
    }
}
