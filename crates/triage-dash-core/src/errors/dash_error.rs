use super::{ConfigError, SourceError};

/// Top-level error type for the dashboard.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("transport setup failed: {0}")]
    TransportSetup(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias.
pub type DashResult<T> = Result<T, DashError>;
