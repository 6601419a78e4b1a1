//! Ring and Polygon - closed sequences of vertices

use super::Vertex;
use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Ordered vertices forming an implicitly closed loop
///
/// A trailing vertex equal to the first one is dropped, so rings coming
/// from GeoJSON-style sources (explicitly closed) and from click sequences
/// (implicitly closed) compare the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring(Vec<Vertex>);

impl Ring {
    pub fn new(mut vertices: Vec<Vertex>) -> Self {
        if vertices.len() > 1 {
            let first = vertices[0];
            if vertices.last().is_some_and(|last| last.approx_eq(&first)) {
                vertices.pop();
            }
        }
        Self(vertices)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of vertices that are not repeats of an earlier vertex
    pub fn distinct_len(&self) -> usize {
        let mut distinct: Vec<&Vertex> = Vec::with_capacity(self.0.len());
        for v in &self.0 {
            if !distinct.iter().any(|d| d.approx_eq(v)) {
                distinct.push(v);
            }
        }
        distinct.len()
    }

    /// Same ring traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        let mut vertices = self.0.clone();
        vertices.reverse();
        Self(vertices)
    }
}

impl From<Vec<Vertex>> for Ring {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}

/// Simple polygon without holes
///
/// Invariant: the ring has at least three vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    ring: Ring,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> DomainResult<Self> {
        Self::from_ring(Ring::new(vertices))
    }

    pub fn from_ring(ring: Ring) -> DomainResult<Self> {
        if ring.len() < 3 {
            return Err(DomainError::IncompleteRing {
                vertices: ring.len(),
            });
        }
        Ok(Self { ring })
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.ring.vertices()
    }

    pub fn first_vertex(&self) -> Vertex {
        // Non-empty by construction
        self.ring.vertices()[0]
    }
}
