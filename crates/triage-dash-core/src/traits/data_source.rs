//! IDataSource: one independently polled unit of dashboard data.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::SourceKind;

/// A fetchable source. Each call is independent; the poller may issue a new
/// fetch while a previous one is still outstanding.
#[async_trait]
pub trait IDataSource: Send + Sync + 'static {
    /// Decoded, display-ready value produced by a successful fetch.
    type Output: Send + Sync + 'static;

    fn kind(&self) -> SourceKind;

    async fn fetch(&self) -> Result<Self::Output, SourceError>;
}
