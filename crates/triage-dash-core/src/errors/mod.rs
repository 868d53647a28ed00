mod config_error;
mod dash_error;
mod source_error;

pub use config_error::ConfigError;
pub use dash_error::{DashError, DashResult};
pub use source_error::SourceError;
