use super::{print_panel, region_provider};
use crate::progress::ProgressType;
use crate::scripted_surface::ScriptedSurface;
use anyhow::{anyhow, Result};
use application::GeofenceSession;
use clap::Args;
use common::GeofenceConfig;
use console::style;
use domain::{DrawEvent, DrawSurface, FenceRecord, SurfaceEvent, Vertex};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Args)]
pub struct SimulateCommand {
    /// Polygon vertex as LAT,LON, in drawing order; repeat once per vertex
    #[arg(
        long = "vertex",
        value_name = "LAT,LON",
        required = true,
        allow_hyphen_values = true
    )]
    vertices: Vec<Vertex>,

    /// Delete the shape after its panels settle
    #[arg(long)]
    delete: bool,

    /// Save the drawn polygon as a fence with this name
    #[arg(long)]
    name: Option<String>,

    /// Current crop for the saved fence
    #[arg(long, requires = "name")]
    crop: Option<String>,

    /// Give up waiting on region data after this many seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl SimulateCommand {
    pub async fn execute(self, config: &GeofenceConfig) -> Result<()> {
        let provider = region_provider(config)?;
        let surface = ScriptedSurface::new(config.map.center()?);
        let mut session = GeofenceSession::new(surface, provider);

        println!(
            "{} map centered on {} (zoom {})",
            style("🗺️").bold(),
            session.controller().surface().view_center(),
            config.map.zoom
        );

        let mut script = vec![SurfaceEvent::DrawStarted];
        script.extend(self.vertices.iter().copied().map(SurfaceEvent::VertexPlaced));
        script.push(SurfaceEvent::Completed(self.vertices.clone()));

        for event in script {
            for draw_event in session.handle_surface_event(event)? {
                print_draw_event(&draw_event);
            }
        }

        let spinner = ProgressType::Query.create_spinner("Waiting for region data...");
        let settled =
            tokio::time::timeout(Duration::from_secs(self.timeout_secs), session.settle()).await;
        match settled {
            Ok(()) => spinner.finish_success(None),
            Err(_) => {
                warn!(timeout_secs = self.timeout_secs, "Region data did not settle in time");
                spinner.finish_error("Region data is still loading");
            }
        }

        for view in session.panel_views() {
            print_panel(&view);
        }

        if let Some(name) = &self.name {
            let selected = session
                .selected_area()
                .ok_or_else(|| anyhow!("No polygon was selected"))?;
            let fence =
                FenceRecord::from_polygon(name, selected.polygon.clone(), self.crop.as_deref());
            println!("{} {}", style("Saved fence").bold(), style(&fence.name).cyan());
            println!("  {}", fence.summary_line());
        }

        if self.delete {
            for draw_event in session.handle_surface_event(SurfaceEvent::Deleted)? {
                print_draw_event(&draw_event);
            }
            for view in session.panel_views() {
                print_panel(&view);
            }
        }

        Ok(())
    }
}

fn print_draw_event(event: &DrawEvent) {
    match event {
        DrawEvent::Clear => println!("{} clear", style("●").dim()),
        DrawEvent::FirstVertex { identifier, point } => {
            println!("{} first vertex {} -> {}", style("●").cyan(), point, identifier)
        }
        DrawEvent::AreaSelected {
            identifier, acres, ..
        } => println!(
            "{} area selected: {} acres -> {}",
            style("●").green(),
            style(format!("{:.2}", acres)).bold(),
            identifier
        ),
    }
}
