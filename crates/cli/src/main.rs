use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::{AreaCommand, FencesCommand, LocateCommand, SimulateCommand};
use common::{init_structured_logging, GeofenceConfig};
use tracing::debug;

#[derive(Parser)]
#[command(name = "krishimitra")]
#[command(about = "🌾 KrishiMitra geofencing: field areas, soil and land use")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Geodesic area of a polygon, in acres
    Area(AreaCommand),
    /// Draw a polygon on a headless map and show its region data
    Simulate(SimulateCommand),
    /// Reverse-geocode a point (default: map center)
    Locate(LocateCommand),
    /// List defined fences
    Fences(FencesCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GeofenceConfig::from_env()?;
    init_structured_logging(config.logging_config())?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Area(cmd) => cmd.execute(),
        Commands::Simulate(cmd) => cmd.execute(&config).await,
        Commands::Locate(cmd) => cmd.execute(&config).await,
        Commands::Fences(cmd) => cmd.execute(),
    }
}
