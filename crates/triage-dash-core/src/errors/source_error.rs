//! Per-source fetch failures.
//!
//! Every variant is caught at the poller boundary and stored as a message in
//! that source's `PollState`; none of them propagate to sibling sources.

/// Why a single fetch of a polled source failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Network failure before any response arrived.
    #[error("{0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("Network response error: {status}")]
    Protocol { status: u16 },

    /// The upstream answered successfully but reported application errors.
    /// Carries the first reported error's message.
    #[error("{message}")]
    Query { message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// The request itself could not be built for this cycle.
    #[error("could not build request: {0}")]
    InvalidRequest(String),
}

impl SourceError {
    /// Short machine-friendly label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Protocol { .. } => "protocol",
            Self::Query { .. } => "query",
            Self::Decode(_) => "decode",
            Self::InvalidRequest(_) => "request",
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
