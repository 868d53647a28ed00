//! ITransport: the request/response boundary to the upstream services.
//!
//! The engine treats the transport as opaque: it hands over a request and
//! gets back a status plus a JSON body. Status and GraphQL error handling
//! happen above this layer so every transport behaves the same way.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// Path relative to the configured base URL, e.g. `/api/workflows/status`.
    pub path: String,
    pub body: Option<Value>,
}

impl TransportRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// Decoded JSON body; `Value::Null` when the body was empty or the
    /// status was not a success.
    pub body: Value,
}

impl TransportResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request/response transport to the upstream query service.
#[async_trait]
pub trait ITransport: Send + Sync {
    /// Send a request. Returns `Err(SourceError::Transport)` only when no
    /// response was received; any status code is an `Ok` response.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, SourceError>;
}
