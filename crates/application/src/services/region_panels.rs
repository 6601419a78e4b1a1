//! Per-panel query state on the consumer side
//!
//! Each panel remembers the identifier it currently tracks. Results for any
//! other identifier, including the same geometry from an earlier draw
//! session, are stale and are dropped.

use crate::dtos::PanelView;
use domain::{AreaIdentifier, QueryKind, QueryState, RegionQueryResult};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RegionPanel {
    kind: QueryKind,
    current: Option<RegionQueryResult>,
}

impl RegionPanel {
    fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            current: None,
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn identifier(&self) -> Option<&AreaIdentifier> {
        self.current.as_ref().map(|r| &r.identifier)
    }

    pub fn state(&self) -> Option<&QueryState> {
        self.current.as_ref().map(|r| &r.state)
    }

    pub fn result(&self) -> Option<&RegionQueryResult> {
        self.current.as_ref()
    }

    /// Settled, or nothing to wait for
    pub fn is_idle(&self) -> bool {
        self.state().map_or(true, QueryState::is_settled)
    }

    pub fn view(&self) -> PanelView {
        PanelView::build(self.kind, self.state())
    }
}

/// The soil and land-use panels
#[derive(Debug, Clone)]
pub struct RegionPanels {
    soil: RegionPanel,
    land_use: RegionPanel,
}

impl Default for RegionPanels {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionPanels {
    pub fn new() -> Self {
        Self {
            soil: RegionPanel::new(QueryKind::Soil),
            land_use: RegionPanel::new(QueryKind::LandUse),
        }
    }

    pub fn panel(&self, kind: QueryKind) -> &RegionPanel {
        match kind {
            QueryKind::Soil => &self.soil,
            QueryKind::LandUse => &self.land_use,
        }
    }

    fn panel_mut(&mut self, kind: QueryKind) -> &mut RegionPanel {
        match kind {
            QueryKind::Soil => &mut self.soil,
            QueryKind::LandUse => &mut self.land_use,
        }
    }

    /// Start tracking a freshly issued query, replacing whatever was there
    pub fn track(&mut self, issued: RegionQueryResult) {
        debug!(kind = %issued.kind, identifier = %issued.identifier, "Panel now tracking");
        let kind = issued.kind;
        self.panel_mut(kind).current = Some(issued);
    }

    /// Back to placeholders; everything in flight becomes stale
    pub fn clear(&mut self) {
        self.soil.current = None;
        self.land_use.current = None;
    }

    /// Apply a settled result if its panel still tracks the same identifier
    ///
    /// Returns whether the result was applied.
    pub fn accept(&mut self, result: RegionQueryResult) -> bool {
        let panel = self.panel_mut(result.kind);
        let is_current = panel
            .identifier()
            .map_or(false, |current| result.matches(current));

        if is_current {
            panel.current = Some(result);
            return true;
        }

        debug!(
            kind = %result.kind,
            identifier = %result.identifier,
            current = ?panel.identifier().map(AreaIdentifier::as_str),
            "Dropping stale region result"
        );
        false
    }

    /// No panel is waiting on a query
    pub fn is_settled(&self) -> bool {
        self.soil.is_idle() && self.land_use.is_idle()
    }

    pub fn views(&self) -> [PanelView; 2] {
        [self.soil.view(), self.land_use.view()]
    }
}
