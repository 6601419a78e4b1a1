//! QueryKind - which region data panel a query feeds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two independent region lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKind {
    /// Land use / land cover, keyed on the finished polygon
    LandUse,
    /// Soil properties, keyed on the first vertex
    Soil,
}

impl QueryKind {
    pub const ALL: [QueryKind; 2] = [QueryKind::LandUse, QueryKind::Soil];

    /// Upstream dataset the summary describes
    pub fn source_name(&self) -> &'static str {
        match self {
            QueryKind::LandUse => "Bhuvan LULC",
            QueryKind::Soil => "SoilGrids",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QueryKind::LandUse => "Land Use / Land Cover",
            QueryKind::Soil => "Soil Properties",
        }
    }

    /// Panel text before any area has been selected
    pub fn placeholder(&self) -> &'static str {
        match self {
            QueryKind::LandUse => "Draw a polygon on the map to see land use data for the area.",
            QueryKind::Soil => "Place a point on the map to see soil data for the location.",
        }
    }

    pub fn loading_message(&self) -> String {
        format!("Loading {} data for the selected area...", self.source_name())
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::LandUse => f.write_str("land-use"),
            QueryKind::Soil => f.write_str("soil"),
        }
    }
}
