//! Region Data Dispatcher
//!
//! Issues soil and land-use queries as independent background tasks. Every
//! result carries the identifier it was issued for and is sent to the
//! consumer over a channel; the dispatcher never cancels work in flight and
//! never decides staleness itself.

use common::{OperationTimer, RequestContext};
use domain::{
    AreaIdentifier, QueryKind, RegionDataProvider, RegionQueryResult, RegionRequest,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct RegionDataDispatcher {
    provider: Arc<dyn RegionDataProvider>,
    results: mpsc::UnboundedSender<RegionQueryResult>,
}

impl RegionDataDispatcher {
    pub fn new(
        provider: Arc<dyn RegionDataProvider>,
        results: mpsc::UnboundedSender<RegionQueryResult>,
    ) -> Self {
        Self { provider, results }
    }

    /// Dispatcher plus the receiving end of its result channel
    pub fn channel(
        provider: Arc<dyn RegionDataProvider>,
    ) -> (Self, mpsc::UnboundedReceiver<RegionQueryResult>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(provider, tx), rx)
    }

    pub fn provider(&self) -> &Arc<dyn RegionDataProvider> {
        &self.provider
    }

    /// Soil query for the first vertex of a drawing
    ///
    /// Returns the `Loading` result immediately; the settled result arrives
    /// on the channel later. Must be called within a tokio runtime.
    pub fn query_soil(&self, identifier: &AreaIdentifier) -> RegionQueryResult {
        self.spawn_query(QueryKind::Soil, identifier.clone())
    }

    /// Land-use query for a committed polygon
    pub fn query_land_use(&self, identifier: &AreaIdentifier) -> RegionQueryResult {
        self.spawn_query(QueryKind::LandUse, identifier.clone())
    }

    fn spawn_query(&self, kind: QueryKind, identifier: AreaIdentifier) -> RegionQueryResult {
        let provider = Arc::clone(&self.provider);
        let results = self.results.clone();
        let loading = RegionQueryResult::loading(kind, identifier.clone());

        tokio::spawn(async move {
            let result = Self::resolve(provider.as_ref(), kind, identifier).await;
            if results.send(result).is_err() {
                debug!(%kind, "Result consumer is gone, discarding region result");
            }
        });

        loading
    }

    /// Ask the provider once and fold the outcome into a settled result
    ///
    /// Provider errors and empty summaries become `Failed`; nothing escapes.
    pub async fn resolve(
        provider: &dyn RegionDataProvider,
        kind: QueryKind,
        identifier: AreaIdentifier,
    ) -> RegionQueryResult {
        let context = RequestContext::new();
        let mut timer = OperationTimer::new(format!("{kind}_query"));
        timer.add_field("identifier", identifier.as_str());
        timer.add_field("request_id", &context.request_id);

        debug!(request_id = %context.request_id, %kind, %identifier, "Dispatching region query");

        let outcome = provider
            .describe(RegionRequest::new(kind, identifier.clone()))
            .await;

        let result = match &outcome {
            Ok(summary) if !summary.trim().is_empty() => {
                info!(request_id = %context.request_id, %kind, %identifier, "✅ Region query settled");
                RegionQueryResult::succeeded(kind, identifier, summary.trim().to_string())
            }
            Ok(_) => {
                warn!(request_id = %context.request_id, %kind, %identifier, "Region query returned no data");
                RegionQueryResult::failed(
                    kind,
                    identifier,
                    format!("No {} data is available for this area.", kind.source_name()),
                )
            }
            Err(e) => {
                warn!(request_id = %context.request_id, %kind, %identifier, error = %e, "Region query failed");
                RegionQueryResult::failed(kind, identifier, e.user_message())
            }
        };

        timer.finish_with_result(&outcome);
        result
    }
}
