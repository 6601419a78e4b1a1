use anyhow::Result;
use clap::Args;
use domain::{area_in_acres, geodesic_area_square_meters, Vertex};
use serde_json::json;
use tracing::warn;

#[derive(Debug, Args)]
pub struct AreaCommand {
    /// Polygon vertex as LAT,LON; repeat once per vertex
    #[arg(
        long = "vertex",
        value_name = "LAT,LON",
        required = true,
        allow_hyphen_values = true
    )]
    vertices: Vec<Vertex>,

    /// Print JSON
    #[arg(long)]
    json: bool,
}

impl AreaCommand {
    pub fn execute(self) -> Result<()> {
        if self.vertices.len() < 3 {
            warn!(vertices = self.vertices.len(), "Fewer than three vertices, area is zero");
        }

        let square_meters = geodesic_area_square_meters(&self.vertices);
        let acres = area_in_acres(&self.vertices);

        if self.json {
            let report = json!({
                "vertices": self.vertices.len(),
                "square_meters": square_meters,
                "acres": acres,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{:.4} acres ({:.1} m²)", acres, square_meters);
        }
        Ok(())
    }
}
