//! RegionQueryResult - one land-use or soil lookup and its outcome

use super::AreaIdentifier;
use crate::value_objects::{QueryKind, QueryState};
use serde::{Deserialize, Serialize};

/// Outcome of a region query, tagged with the identifier it was issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionQueryResult {
    pub kind: QueryKind,
    pub identifier: AreaIdentifier,
    pub state: QueryState,
}

impl RegionQueryResult {
    pub fn loading(kind: QueryKind, identifier: AreaIdentifier) -> Self {
        Self {
            kind,
            identifier,
            state: QueryState::Loading,
        }
    }

    pub fn succeeded(kind: QueryKind, identifier: AreaIdentifier, summary: String) -> Self {
        Self {
            kind,
            identifier,
            state: QueryState::Success { summary },
        }
    }

    pub fn failed(kind: QueryKind, identifier: AreaIdentifier, message: String) -> Self {
        Self {
            kind,
            identifier,
            state: QueryState::Failed { message },
        }
    }

    /// Summary or error text, if the query has settled
    pub fn payload(&self) -> Option<&str> {
        match &self.state {
            QueryState::Loading => None,
            QueryState::Success { summary } => Some(summary),
            QueryState::Failed { message } => Some(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, QueryState::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, QueryState::Failed { .. })
    }

    /// Whether this result belongs to the given identifier
    pub fn matches(&self, identifier: &AreaIdentifier) -> bool {
        &self.identifier == identifier
    }
}
