//! Drawing Controller - polygon draw lifecycle as a finite-state machine
//!
//! Surface events go in, draw events come out. The controller guarantees
//! ordering only: `Clear` (when something was issued before) precedes the
//! next `FirstVertex`, which precedes `AreaSelected` for the same session.
//! It never performs I/O and has no opinion about what listeners do.

use crate::entities::{AreaIdentifier, DrawSession, Polygon, Vertex};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::DrawSurface;
use crate::services::area_calculator::area_in_acres;
use crate::Acres;
use std::fmt;
use tracing::{debug, info, warn};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// Surface unavailable, tool disarmed
    NotReady,
    Idle,
    Drawing,
    Committed,
}

impl fmt::Display for DrawState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Input from the map surface
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// User activated the polygon tool
    DrawStarted,
    VertexPlaced(Vertex),
    /// Ring closed; carries the surface's final vertex list
    Completed(Vec<Vertex>),
    Cancelled,
    /// Committed shape removed
    Deleted,
}

impl SurfaceEvent {
    fn name(&self) -> &'static str {
        match self {
            SurfaceEvent::DrawStarted => "DrawStarted",
            SurfaceEvent::VertexPlaced(_) => "VertexPlaced",
            SurfaceEvent::Completed(_) => "Completed",
            SurfaceEvent::Cancelled => "Cancelled",
            SurfaceEvent::Deleted => "Deleted",
        }
    }
}

/// Output for the UI consumer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// Everything issued so far is stale
    Clear,
    FirstVertex {
        identifier: AreaIdentifier,
        point: Vertex,
    },
    AreaSelected {
        identifier: AreaIdentifier,
        polygon: Polygon,
        acres: Acres,
    },
}

impl DrawEvent {
    /// Forward to the matching listener callback
    pub fn deliver(&self, listener: &mut dyn DrawListener) {
        match self {
            DrawEvent::Clear => listener.on_clear(),
            DrawEvent::FirstVertex { identifier, point } => {
                listener.on_first_vertex(identifier, *point)
            }
            DrawEvent::AreaSelected {
                identifier,
                polygon,
                acres,
            } => listener.on_area_select(identifier, polygon, *acres),
        }
    }
}

/// Callback form of [`DrawEvent`]
pub trait DrawListener {
    fn on_first_vertex(&mut self, identifier: &AreaIdentifier, point: Vertex);
    fn on_area_select(&mut self, identifier: &AreaIdentifier, polygon: &Polygon, acres: Acres);
    fn on_clear(&mut self);
}

/// Owns the map surface and the current draw session
pub struct DrawController<S: DrawSurface> {
    surface: S,
    state: DrawState,
    session: DrawSession,
}

impl<S: DrawSurface> DrawController<S> {
    pub fn new(surface: S) -> Self {
        let mut controller = Self {
            surface,
            state: DrawState::NotReady,
            session: DrawSession::default(),
        };
        controller.refresh_readiness();
        controller
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state != DrawState::NotReady
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Re-check the surface and arm or disarm the tool accordingly
    ///
    /// Losing the surface drops the live session, so a `Clear` is returned
    /// if anything had been issued.
    pub fn refresh_readiness(&mut self) -> Vec<DrawEvent> {
        let mut events = Vec::new();
        let ready = self.surface.is_ready();

        match (self.state, ready) {
            (DrawState::NotReady, true) => {
                self.surface.set_polygon_tool(true);
                self.state = DrawState::Idle;
                info!(center = %self.surface.view_center(), "🗺️ Map surface ready, polygon tool armed");
            }
            (DrawState::NotReady, false) => {
                self.surface.set_polygon_tool(false);
                debug!("Map surface not ready, polygon tool disarmed");
            }
            (_, false) => {
                warn!(state = %self.state, "Map surface lost, dropping draw session");
                self.surface.set_polygon_tool(false);
                if self.session.has_emitted() {
                    events.push(DrawEvent::Clear);
                }
                self.session = DrawSession::new(self.session.sequence());
                self.state = DrawState::NotReady;
            }
            (_, true) => {}
        }

        events
    }

    /// Apply one surface event and return the draw events it produces, in order
    pub fn handle(&mut self, event: SurfaceEvent) -> DomainResult<Vec<DrawEvent>> {
        if self.state == DrawState::NotReady {
            self.refresh_readiness();
            if self.state == DrawState::NotReady {
                return Err(DomainError::SurfaceNotReady);
            }
        }

        let mut events = Vec::new();
        match (self.state, event) {
            (
                DrawState::Idle | DrawState::Drawing | DrawState::Committed,
                SurfaceEvent::DrawStarted,
            ) => {
                self.begin_session(&mut events);
            }
            (DrawState::Drawing, SurfaceEvent::VertexPlaced(vertex)) => {
                if let Some(identifier) = self.session.place_vertex(vertex) {
                    debug!(%identifier, "First vertex placed");
                    events.push(DrawEvent::FirstVertex {
                        identifier,
                        point: vertex,
                    });
                }
            }
            (DrawState::Drawing, SurfaceEvent::Completed(vertices)) => {
                self.complete(vertices, &mut events)?;
            }
            (DrawState::Drawing, SurfaceEvent::Cancelled) => {
                debug!(session = self.session.sequence(), "Drawing cancelled");
                self.session.abandon();
                self.state = DrawState::Idle;
            }
            (DrawState::Committed, SurfaceEvent::Deleted) => {
                info!(session = self.session.sequence(), "🗑️ Shape deleted");
                events.push(DrawEvent::Clear);
                self.session = DrawSession::new(self.session.sequence());
                self.state = DrawState::Idle;
            }
            (state, event) => {
                return Err(DomainError::InvalidTransition {
                    state: state.to_string(),
                    event: event.name().to_string(),
                });
            }
        }

        Ok(events)
    }

    /// [`handle`](Self::handle), delivering each event to a listener
    pub fn dispatch(
        &mut self,
        event: SurfaceEvent,
        listener: &mut dyn DrawListener,
    ) -> DomainResult<Vec<DrawEvent>> {
        let events = self.handle(event)?;
        for event in &events {
            event.deliver(listener);
        }
        Ok(events)
    }

    fn begin_session(&mut self, events: &mut Vec<DrawEvent>) {
        if self.session.has_emitted() {
            events.push(DrawEvent::Clear);
        }
        self.session = DrawSession::new(self.session.sequence() + 1);
        self.state = DrawState::Drawing;
        debug!(session = self.session.sequence(), "Drawing started");
    }

    fn complete(&mut self, vertices: Vec<Vertex>, events: &mut Vec<DrawEvent>) -> DomainResult<()> {
        // Rejected rings leave the session in Drawing
        let polygon = Polygon::new(vertices)?;

        // Surfaces that report only the finished ring still get the
        // point event first
        if self.session.soil_identifier().is_none() {
            let point = polygon.first_vertex();
            let identifier = self.session.adopt_first_vertex(point);
            events.push(DrawEvent::FirstVertex { identifier, point });
        }

        let acres = area_in_acres(polygon.vertices());
        let identifier = self.session.commit(polygon.clone(), acres);
        info!(
            session = self.session.sequence(),
            vertices = polygon.vertices().len(),
            acres,
            "📐 Polygon completed"
        );
        events.push(DrawEvent::AreaSelected {
            identifier,
            polygon,
            acres,
        });
        self.state = DrawState::Committed;
        Ok(())
    }
}
