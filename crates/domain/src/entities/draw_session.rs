//! DrawSession - one polygon-drawing attempt

use super::{AreaIdentifier, Polygon, Vertex};
use crate::Acres;

/// State of a single drawing attempt
///
/// Holds the identifiers that region queries for this attempt are tagged
/// with; each carries the session sequence. Only the drawing controller mutates a session.
#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    sequence: u64,
    vertices: Vec<Vertex>,
    soil: Option<AreaIdentifier>,
    land_use: Option<AreaIdentifier>,
    polygon: Option<Polygon>,
    acres: Option<Acres>,
}

impl DrawSession {
    pub fn new(sequence: u64) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }

    /// Monotonic session number, 0 before the first drawing
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Identifier the soil panel tracks (from the first vertex)
    pub fn soil_identifier(&self) -> Option<&AreaIdentifier> {
        self.soil.as_ref()
    }

    /// Identifier the land-use panel tracks (from the finished polygon)
    pub fn land_use_identifier(&self) -> Option<&AreaIdentifier> {
        self.land_use.as_ref()
    }

    pub fn polygon(&self) -> Option<&Polygon> {
        self.polygon.as_ref()
    }

    pub fn acres(&self) -> Option<Acres> {
        self.acres
    }

    /// Whether any identifier has been handed out since the last clear
    pub fn has_emitted(&self) -> bool {
        self.soil.is_some() || self.land_use.is_some()
    }

    /// Record a placed vertex; returns the point identifier if it was the first
    pub(crate) fn place_vertex(&mut self, vertex: Vertex) -> Option<AreaIdentifier> {
        self.vertices.push(vertex);
        if self.soil.is_none() {
            let id = AreaIdentifier::for_point(&vertex).in_session(self.sequence);
            self.soil = Some(id.clone());
            return Some(id);
        }
        None
    }

    /// Record the point identifier for a polygon completed without vertex events
    pub(crate) fn adopt_first_vertex(&mut self, vertex: Vertex) -> AreaIdentifier {
        let id = AreaIdentifier::for_point(&vertex).in_session(self.sequence);
        self.soil = Some(id.clone());
        id
    }

    pub(crate) fn commit(&mut self, polygon: Polygon, acres: Acres) -> AreaIdentifier {
        let id = AreaIdentifier::for_polygon(&polygon).in_session(self.sequence);
        self.vertices = polygon.vertices().to_vec();
        self.land_use = Some(id.clone());
        self.polygon = Some(polygon);
        self.acres = Some(acres);
        id
    }

    /// Drop in-progress vertices but keep issued identifiers
    pub(crate) fn abandon(&mut self) {
        self.vertices.clear();
    }
}
