//! What a region data panel shows right now

use domain::{QueryKind, QueryState};
use serde::{Deserialize, Serialize};

/// Coarse panel status, independent of the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStatus {
    /// Nothing selected yet
    Placeholder,
    Loading,
    Success,
    Failed,
}

/// Render-ready snapshot of one panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub kind: QueryKind,
    pub title: String,
    pub source: String,
    pub status: PanelStatus,
    pub text: String,
}

impl PanelView {
    pub(crate) fn build(kind: QueryKind, state: Option<&QueryState>) -> Self {
        let (status, text) = match state {
            None => (PanelStatus::Placeholder, kind.placeholder().to_string()),
            Some(QueryState::Loading) => (PanelStatus::Loading, kind.loading_message()),
            Some(QueryState::Success { summary }) => (PanelStatus::Success, summary.clone()),
            Some(QueryState::Failed { message }) => (PanelStatus::Failed, message.clone()),
        };

        Self {
            kind,
            title: kind.title().to_string(),
            source: kind.source_name().to_string(),
            status,
            text,
        }
    }
}
