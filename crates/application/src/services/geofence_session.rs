use super::{RegionDataDispatcher, RegionPanels};
use crate::dtos::PanelView;
use domain::{
    Acres, AreaIdentifier, DomainResult, DrawController, DrawEvent, DrawListener, DrawSurface,
    Polygon, QueryKind, QueryState, RegionDataProvider, RegionQueryResult, SurfaceEvent, Vertex,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Polygon picked by the last completed drawing
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedArea {
    pub identifier: AreaIdentifier,
    pub polygon: Polygon,
    pub acres: Acres,
}

/// Listener side of the controller: issues queries and updates panels
struct PanelBinding {
    dispatcher: RegionDataDispatcher,
    panels: RegionPanels,
    selected: Option<SelectedArea>,
}

impl DrawListener for PanelBinding {
    fn on_first_vertex(&mut self, identifier: &AreaIdentifier, _point: Vertex) {
        let issued = self.dispatcher.query_soil(identifier);
        self.panels.track(issued);
    }

    fn on_area_select(&mut self, identifier: &AreaIdentifier, polygon: &Polygon, acres: Acres) {
        debug!(%identifier, acres, "Issuing land-use query for selected area");
        let issued = self.dispatcher.query_land_use(identifier);
        self.panels.track(issued);
        self.selected = Some(SelectedArea {
            identifier: identifier.clone(),
            polygon: polygon.clone(),
            acres,
        });
    }

    fn on_clear(&mut self) {
        self.panels.clear();
        self.selected = None;
    }
}

/// One map with its draw controller, region queries and panels
pub struct GeofenceSession<S: DrawSurface> {
    controller: DrawController<S>,
    binding: PanelBinding,
    results: mpsc::UnboundedReceiver<RegionQueryResult>,
}

impl<S: DrawSurface> GeofenceSession<S> {
    pub fn new(surface: S, provider: Arc<dyn RegionDataProvider>) -> Self {
        let (dispatcher, results) = RegionDataDispatcher::channel(provider);
        Self {
            controller: DrawController::new(surface),
            binding: PanelBinding {
                dispatcher,
                panels: RegionPanels::new(),
                selected: None,
            },
            results,
        }
    }

    pub fn controller(&self) -> &DrawController<S> {
        &self.controller
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.controller.surface_mut()
    }

    pub fn panels(&self) -> &RegionPanels {
        &self.binding.panels
    }

    pub fn panel_views(&self) -> [PanelView; 2] {
        self.binding.panels.views()
    }

    pub fn selected_area(&self) -> Option<&SelectedArea> {
        self.binding.selected.as_ref()
    }

    /// Feed a map event through the controller, issuing any queries it triggers
    ///
    /// Must be called within a tokio runtime.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> DomainResult<Vec<DrawEvent>> {
        self.controller.dispatch(event, &mut self.binding)
    }

    /// Re-check surface readiness, delivering a `Clear` if the surface went away
    pub fn refresh_readiness(&mut self) -> Vec<DrawEvent> {
        let events = self.controller.refresh_readiness();
        for event in &events {
            event.deliver(&mut self.binding);
        }
        events
    }

    /// Apply every result already waiting, without blocking
    ///
    /// Returns how many were applied; stale ones are dropped.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.results.try_recv() {
            if self.binding.panels.accept(result) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next settled result and apply it
    ///
    /// Returns whether it was current. A query that never resolves keeps
    /// this waiting.
    pub async fn next_result(&mut self) -> bool {
        match self.results.recv().await {
            Some(result) => self.binding.panels.accept(result),
            // The binding holds a sender, so the channel stays open
            None => false,
        }
    }

    /// Wait until no panel is loading
    pub async fn settle(&mut self) {
        while !self.binding.panels.is_settled() {
            self.next_result().await;
        }
    }

    pub fn panel_state(&self, kind: QueryKind) -> Option<&QueryState> {
        self.binding.panels.panel(kind).state()
    }
}
