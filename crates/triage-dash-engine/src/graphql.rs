//! GraphQL envelope handling.
//!
//! Turns a raw transport response into the `data` object, applying the
//! failure precedence shared by every GraphQL-backed source: transport
//! failure, then non-success status, then the first reported query error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use triage_dash_core::errors::SourceError;
use triage_dash_core::traits::{ITransport, TransportRequest};

/// GraphQL query request structure.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Value::Object(Map::new()),
        }
    }
}

/// GraphQL response structure.
#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
}

/// Reported when the first GraphQL error carries no message text.
const UNNAMED_QUERY_ERROR: &str = "query failed";

#[derive(Debug, Deserialize)]
struct GraphQLError {
    #[serde(default)]
    message: Option<String>,
}

impl GraphQLError {
    fn message(&self) -> &str {
        match self.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => message,
            _ => UNNAMED_QUERY_ERROR,
        }
    }
}

/// POST a GraphQL request and return its `data` object.
pub async fn execute(
    transport: &dyn ITransport,
    path: &str,
    request: &GraphQLRequest,
) -> Result<Map<String, Value>, SourceError> {
    let body = serde_json::to_value(request)?;
    let response = transport
        .send(TransportRequest::post_json(path, body))
        .await?;

    if !response.is_success() {
        return Err(SourceError::Protocol {
            status: response.status,
        });
    }

    let envelope: GraphQLResponse = serde_json::from_value(response.body)?;
    if let Some(first) = envelope.errors.as_ref().and_then(|errors| errors.first()) {
        debug!(
            error_count = envelope.errors.as_ref().map_or(0, Vec::len),
            "graphql response reported errors"
        );
        return Err(SourceError::Query {
            message: first.message().to_string(),
        });
    }

    envelope
        .data
        .ok_or_else(|| SourceError::Decode("graphql response has no data".to_string()))
}

/// Read `data[alias].aggregate.count`, `None` if any step is missing or the
/// count is not a non-negative integer.
pub fn aggregate_count(data: &Map<String, Value>, alias: &str) -> Option<u64> {
    data.get(alias)?.get("aggregate")?.get("count")?.as_u64()
}

/// Like [`aggregate_count`] but a missing value is a decode error.
pub fn require_aggregate_count(data: &Map<String, Value>, alias: &str) -> Result<u64, SourceError> {
    aggregate_count(data, alias)
        .ok_or_else(|| SourceError::Decode(format!("missing aggregate count for `{alias}`")))
}
