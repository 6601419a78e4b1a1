//! QueryState - Loading, Success or Failed

use serde::{Deserialize, Serialize};

/// Lifecycle of a single region query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QueryState {
    Loading,
    Success { summary: String },
    Failed { message: String },
}

impl QueryState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, QueryState::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryState::Loading => "loading",
            QueryState::Success { .. } => "success",
            QueryState::Failed { .. } => "failed",
        }
    }
}
