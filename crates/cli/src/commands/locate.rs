use crate::progress::ProgressType;
use anyhow::Result;
use clap::Args;
use common::GeofenceConfig;
use console::style;
use domain::Vertex;
use llm::{LlmClient, LocationResolver};

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Latitude; defaults to the configured map center
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    /// Longitude; defaults to the configured map center
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
}

impl LocateCommand {
    pub async fn execute(self, config: &GeofenceConfig) -> Result<()> {
        let point = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Vertex::new(lat, lon)?,
            _ => config.map.center()?,
        };

        let resolver = LocationResolver::new(LlmClient::from_env()?);
        let spinner = ProgressType::Geocode.create_spinner(&format!("Locating {point}..."));

        match resolver.resolve(&point).await {
            Ok(address) => {
                spinner.finish_success(None);
                println!("{}", style(&address.description).bold());
                println!("  City:    {}", address.city);
                println!("  State:   {}", address.state);
                println!("  Country: {}", address.country);
                Ok(())
            }
            Err(e) => {
                spinner.finish_error("Could not fetch location name");
                Err(e)
            }
        }
    }
}
