use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use triage_dash_core::errors::SourceError;
use triage_dash_core::models::{SourceKind, TimeSeries};
use triage_dash_core::traits::{IClock, IDataSource, ITransport};

use crate::graphql;
use crate::timeseries::TimeSeriesBucketer;

/// Optional source: per-day file and finding counts.
///
/// "Now" is read once per cycle and every bucket boundary of that cycle is
/// derived from it.
pub struct TimeSeriesSource {
    transport: Arc<dyn ITransport>,
    graphql_path: String,
    bucketer: TimeSeriesBucketer,
    clock: Arc<dyn IClock>,
}

impl TimeSeriesSource {
    pub fn new(
        transport: Arc<dyn ITransport>,
        graphql_path: impl Into<String>,
        bucketer: TimeSeriesBucketer,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self {
            transport,
            graphql_path: graphql_path.into(),
            bucketer,
            clock,
        }
    }
}

#[async_trait]
impl IDataSource for TimeSeriesSource {
    type Output = TimeSeries;

    fn kind(&self) -> SourceKind {
        SourceKind::TimeSeries
    }

    async fn fetch(&self) -> Result<TimeSeries, SourceError> {
        let now = self.clock.now();
        let buckets = self
            .bucketer
            .buckets(now)
            .map_err(|e| SourceError::InvalidRequest(e.to_string()))?;
        debug!(
            buckets = buckets.len(),
            first = %buckets.first().map(|b| b.start.to_string()).unwrap_or_default(),
            "requesting time series batch"
        );
        let request = self.bucketer.build_request(&buckets);
        let data = graphql::execute(self.transport.as_ref(), &self.graphql_path, &request).await?;
        Ok(self.bucketer.reduce(&buckets, &data))
    }
}
