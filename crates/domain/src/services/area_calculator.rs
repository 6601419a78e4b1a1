//! Area Calculator - geodesic polygon area in acres
//!
//! Areas are computed on the WGS84 ellipsoid with Karney's algorithm (via
//! `geo`). Summing a planar shoelace over raw degrees is wrong by a factor
//! that depends on latitude and size, so it is never used for the result.

use crate::entities::{Ring, Vertex};
use crate::Acres;
use geo::algorithm::geodesic_area::GeodesicArea;
use geo::{Coord, LineString, Polygon as GeoPolygon};

/// International acre in square metres
pub const SQUARE_METERS_PER_ACRE: f64 = 4_046.856_422_4;

/// Sine of the largest angle still treated as a straight line
const COLLINEAR_SINE_TOLERANCE: f64 = 1e-9;

/// Geodesic area of an implicitly closed ring, in square metres
///
/// Returns 0 for fewer than three distinct vertices or colinear vertices.
/// Traversal direction does not matter. Rings are assumed to enclose less
/// than half of the Earth, so the magnitude of the signed area is the area.
pub fn geodesic_area_square_meters(vertices: &[Vertex]) -> f64 {
    let ring = Ring::new(vertices.to_vec());
    if ring.distinct_len() < 3 || is_collinear(ring.vertices()) {
        return 0.0;
    }

    let coords: Vec<Coord<f64>> = ring
        .vertices()
        .iter()
        .map(|v| Coord {
            x: v.lon(),
            y: v.lat(),
        })
        .collect();
    let polygon = GeoPolygon::new(LineString::from(coords), vec![]);

    let area = polygon.geodesic_area_signed().abs();
    if area.is_finite() {
        area.max(0.0)
    } else {
        0.0
    }
}

/// Geodesic area of an implicitly closed ring, in acres
pub fn area_in_acres(vertices: &[Vertex]) -> Acres {
    geodesic_area_square_meters(vertices) / SQUARE_METERS_PER_ACRE
}

/// All vertices on one straight line in lat/lon space
///
/// Longitudes are unwrapped around the first vertex so lines crossing the
/// antimeridian are still recognised.
fn is_collinear(vertices: &[Vertex]) -> bool {
    let Some(origin) = vertices.first() else {
        return true;
    };

    let offsets: Vec<(f64, f64)> = vertices
        .iter()
        .map(|v| (unwrap_lon(v.lon() - origin.lon()), v.lat() - origin.lat()))
        .collect();

    // Direction to the farthest vertex defines the candidate line
    let (dx, dy) = offsets
        .iter()
        .copied()
        .fold((0.0, 0.0), |best, p| {
            if p.0 * p.0 + p.1 * p.1 > best.0 * best.0 + best.1 * best.1 {
                p
            } else {
                best
            }
        });
    let d_norm = (dx * dx + dy * dy).sqrt();
    if d_norm == 0.0 {
        return true;
    }

    offsets.iter().all(|&(px, py)| {
        let p_norm = (px * px + py * py).sqrt();
        p_norm == 0.0 || (dx * py - dy * px).abs() <= COLLINEAR_SINE_TOLERANCE * d_norm * p_norm
    })
}

fn unwrap_lon(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
