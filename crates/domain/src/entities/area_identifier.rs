//! AreaIdentifier - correlation key for region data requests
//!
//! The key is derived from geometry, so the same point or polygon always
//! yields the same text. The text form is WKT, which doubles as the
//! descriptor handed to region data providers. Identifiers issued by a draw
//! session also carry its sequence number, so redrawing the same shape in a
//! later session never matches an earlier session's results.

use super::{Polygon, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of geometry an identifier was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierScope {
    Point,
    Polygon,
}

/// Opaque key echoed back with every region query result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaIdentifier {
    scope: IdentifierScope,
    key: String,
    #[serde(default)]
    session: u64,
}

impl AreaIdentifier {
    /// Identifier for a single point (soil lookups)
    pub fn for_point(point: &Vertex) -> Self {
        Self {
            scope: IdentifierScope::Point,
            key: format!("POINT ({})", wkt_coord(point)),
            session: 0,
        }
    }

    /// Identifier for a whole polygon (land-use lookups)
    pub fn for_polygon(polygon: &Polygon) -> Self {
        let mut coords: Vec<String> = polygon.vertices().iter().map(wkt_coord).collect();
        // WKT rings repeat the first coordinate
        coords.push(wkt_coord(&polygon.first_vertex()));
        Self {
            scope: IdentifierScope::Polygon,
            key: format!("POLYGON (({}))", coords.join(", ")),
            session: 0,
        }
    }

    /// Identifier for a named area such as a saved fence
    pub fn named(name: &str) -> Self {
        Self {
            scope: IdentifierScope::Polygon,
            key: name.trim().to_string(),
            session: 0,
        }
    }

    /// Tie the identifier to a draw session
    pub fn in_session(mut self, session: u64) -> Self {
        self.session = session;
        self
    }

    /// Draw session the identifier was issued in, 0 outside any session
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn scope(&self) -> IdentifierScope {
        self.scope
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

fn wkt_coord(v: &Vertex) -> String {
    format!("{:.6} {:.6}", v.lon(), v.lat())
}

impl fmt::Display for AreaIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
