//! Vertex - a geographic point in WGS84 degrees

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic point (latitude, longitude) in degrees
///
/// Always holds finite, in-range coordinates; construction goes through
/// [`Vertex::new`] or [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    lat: f64,
    lon: f64,
}

impl Vertex {
    /// Create a vertex with range validation
    pub fn new(lat: f64, lon: f64) -> DomainResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Same point up to ~1 cm
    pub fn approx_eq(&self, other: &Vertex) -> bool {
        (self.lat - other.lat).abs() < 1e-7 && (self.lon - other.lon).abs() < 1e-7
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

impl FromStr for Vertex {
    type Err = DomainError;

    /// Parses "lat,lon"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidCoordinate(s.to_string()))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidCoordinate(s.to_string()))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidCoordinate(s.to_string()))?;
        Vertex::new(lat, lon)
    }
}
