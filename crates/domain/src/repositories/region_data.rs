//! RegionDataProvider - "describe this location or area"

use crate::entities::AreaIdentifier;
use crate::errors::ProviderResult;
use crate::value_objects::QueryKind;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single region lookup request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRequest {
    pub kind: QueryKind,
    pub identifier: AreaIdentifier,
}

impl RegionRequest {
    pub fn new(kind: QueryKind, identifier: AreaIdentifier) -> Self {
        Self { kind, identifier }
    }

    /// Text form of the area handed to the provider
    pub fn descriptor(&self) -> &str {
        self.identifier.as_str()
    }
}

/// External collaborator that summarises land use or soil for an area
///
/// Implementations must be idempotent per request: asking twice about the
/// same identifier is allowed and carries no side effects.
#[async_trait]
pub trait RegionDataProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Natural-language summary for the requested area
    async fn describe(&self, request: RegionRequest) -> ProviderResult<String>;
}
