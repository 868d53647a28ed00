use std::sync::Arc;

use async_trait::async_trait;

use triage_dash_core::errors::SourceError;
use triage_dash_core::models::{MetricSnapshot, SourceKind};
use triage_dash_core::traits::{IClock, IDataSource, ITransport};

use crate::graphql::{self, GraphQLRequest};
use crate::stats::StatsAggregator;

/// Required source: file, finding, rule and triage counters.
pub struct PrimaryStatsSource {
    transport: Arc<dyn ITransport>,
    graphql_path: String,
    aggregator: StatsAggregator,
    request: GraphQLRequest,
    clock: Arc<dyn IClock>,
}

impl PrimaryStatsSource {
    pub fn new(
        transport: Arc<dyn ITransport>,
        graphql_path: impl Into<String>,
        aggregator: StatsAggregator,
        clock: Arc<dyn IClock>,
    ) -> Self {
        let request = aggregator.build_request();
        Self {
            transport,
            graphql_path: graphql_path.into(),
            aggregator,
            request,
            clock,
        }
    }
}

#[async_trait]
impl IDataSource for PrimaryStatsSource {
    type Output = MetricSnapshot;

    fn kind(&self) -> SourceKind {
        SourceKind::PrimaryStats
    }

    async fn fetch(&self) -> Result<MetricSnapshot, SourceError> {
        let data = graphql::execute(self.transport.as_ref(), &self.graphql_path, &self.request).await?;
        self.aggregator.derive(&data, self.clock.now())
    }
}
