//! # triage-dash-core
//!
//! Shared foundation for the triage dashboard: configuration, error types,
//! the data model produced by each polled source, and the collaborator traits
//! (`Transport`, `DataSource`, `Clock`) the engine is written against.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::DashboardConfig;
pub use errors::{ConfigError, DashError, DashResult, SourceError};
