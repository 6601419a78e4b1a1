use async_trait::async_trait;
use domain::{ProviderResult, QueryKind, RegionDataProvider, RegionRequest};
use std::time::Duration;
use tracing::debug;

const NORTH_FIELD_LAND_USE: &str =
    "The North Field consists of 80% agricultural land and 20% fallow land.";
const NORTH_FIELD_SOIL: &str = "The soil in the North Field is primarily sandy loam with a pH of 6.8 and high organic carbon content (1.2%).";
const GENERIC_LAND_USE: &str =
    "The selected area is primarily a built-up area (60%) with some small water bodies (40%).";
const GENERIC_SOIL: &str =
    "The soil in this area has high clay content, a pH of 7.5, and low nitrogen levels.";

/// Placeholder collaborator returning fixed summaries
///
/// Descriptors mentioning "north" get the North Field texts. Never fails.
#[derive(Debug, Clone, Default)]
pub struct CannedRegionProvider {
    latency: Duration,
}

impl CannedRegionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every answer, like a slow upstream service
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn summary_for(kind: QueryKind, descriptor: &str) -> &'static str {
        let is_north_field = descriptor.to_lowercase().contains("north");
        match (kind, is_north_field) {
            (QueryKind::LandUse, true) => NORTH_FIELD_LAND_USE,
            (QueryKind::LandUse, false) => GENERIC_LAND_USE,
            (QueryKind::Soil, true) => NORTH_FIELD_SOIL,
            (QueryKind::Soil, false) => GENERIC_SOIL,
        }
    }
}

#[async_trait]
impl RegionDataProvider for CannedRegionProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn describe(&self, request: RegionRequest) -> ProviderResult<String> {
        debug!(
            kind = %request.kind,
            identifier = %request.identifier,
            latency_ms = self.latency.as_millis() as u64,
            "Serving canned region data"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::summary_for(request.kind, request.descriptor()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{AreaIdentifier, Vertex};

    fn point_request(kind: QueryKind) -> RegionRequest {
        let point = Vertex::new(19.9975, 73.7898).unwrap();
        RegionRequest::new(kind, AreaIdentifier::for_point(&point))
    }

    #[tokio::test]
    async fn test_generic_texts_for_coordinates() {
        let provider = CannedRegionProvider::new();
        let soil = provider.describe(point_request(QueryKind::Soil)).await.unwrap();
        let land_use = provider
            .describe(point_request(QueryKind::LandUse))
            .await
            .unwrap();
        assert_eq!(soil, GENERIC_SOIL);
        assert_eq!(land_use, GENERIC_LAND_USE);
    }

    #[tokio::test]
    async fn test_north_field_texts_for_named_area() {
        let provider = CannedRegionProvider::new();
        let request = RegionRequest::new(
            QueryKind::Soil,
            AreaIdentifier::named("the North Field"),
        );
        let soil = provider.describe(request).await.unwrap();
        assert!(soil.contains("sandy loam"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let provider = CannedRegionProvider::with_latency(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        provider.describe(point_request(QueryKind::Soil)).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
