//! FenceRecord - a named, saved geofence

use super::{AreaIdentifier, Polygon};
use crate::services::area_in_acres;
use crate::Acres;
use serde::{Deserialize, Serialize};

/// Saved field boundary with its acreage and current crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceRecord {
    pub id: String,
    pub name: String,
    pub acres: Acres,
    pub crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Polygon>,
}

impl FenceRecord {
    pub fn new(name: &str, acres: Acres, crop: Option<&str>) -> Self {
        Self {
            id: slug(name),
            name: name.to_string(),
            acres,
            crop: crop.map(str::to_string),
            boundary: None,
        }
    }

    /// Save a drawn polygon under a name
    pub fn from_polygon(name: &str, polygon: Polygon, crop: Option<&str>) -> Self {
        let acres = area_in_acres(polygon.vertices());
        Self {
            boundary: Some(polygon),
            ..Self::new(name, acres, crop)
        }
    }

    /// Identifier used when asking for region data about this fence
    pub fn identifier(&self) -> AreaIdentifier {
        match &self.boundary {
            Some(polygon) => AreaIdentifier::for_polygon(polygon),
            None => AreaIdentifier::named(&self.name),
        }
    }

    /// "12.5 Acres - Current crop: Wheat"
    pub fn summary_line(&self) -> String {
        format!(
            "{:.1} Acres - Current crop: {}",
            self.acres,
            self.crop.as_deref().unwrap_or("N/A")
        )
    }
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            dash = false;
        } else if !dash && !out.is_empty() {
            out.push('-');
            dash = true;
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Fences shown before the user has drawn anything
pub fn default_fences() -> Vec<FenceRecord> {
    vec![
        FenceRecord::new("North Field (Field A)", 12.5, Some("Wheat")),
        FenceRecord::new("South-East Orchard (Field B)", 8.2, Some("Grapes")),
        FenceRecord::new("Reservoir Area", 2.1, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Vertex;

    #[test]
    fn test_default_fences() {
        let fences = default_fences();
        assert_eq!(fences.len(), 3);
        assert_eq!(fences[0].id, "north-field-field-a");
        assert_eq!(fences[0].summary_line(), "12.5 Acres - Current crop: Wheat");
        assert_eq!(fences[2].summary_line(), "2.1 Acres - Current crop: N/A");
        assert!(fences[0].identifier().as_str().contains("North"));
    }

    #[test]
    fn test_fence_from_polygon() {
        let polygon = Polygon::new(vec![
            Vertex::new(0.0, 0.0).unwrap(),
            Vertex::new(0.0, 0.01).unwrap(),
            Vertex::new(0.01, 0.01).unwrap(),
            Vertex::new(0.01, 0.0).unwrap(),
        ])
        .unwrap();
        let fence = FenceRecord::from_polygon("Test Plot", polygon.clone(), Some("Onion"));
        assert!(fence.acres > 0.0);
        assert_eq!(fence.identifier(), AreaIdentifier::for_polygon(&polygon));
        assert_eq!(fence.id, "test-plot");
    }
}
