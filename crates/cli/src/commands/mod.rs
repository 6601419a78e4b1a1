pub mod area;
pub mod fences;
pub mod locate;
pub mod simulate;

pub use area::AreaCommand;
pub use fences::FencesCommand;
pub use locate::LocateCommand;
pub use simulate::SimulateCommand;

use anyhow::Result;
use application::{PanelStatus, PanelView};
use common::{GeofenceConfig, RegionProviderKind};
use console::style;
use domain::RegionDataProvider;
use llm::{CannedRegionProvider, LlmClient, LlmRegionProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Region data collaborator selected by configuration
pub fn region_provider(config: &GeofenceConfig) -> Result<Arc<dyn RegionDataProvider>> {
    let provider: Arc<dyn RegionDataProvider> = match config.region_provider {
        RegionProviderKind::Canned => Arc::new(CannedRegionProvider::with_latency(
            Duration::from_millis(config.canned_latency_ms),
        )),
        RegionProviderKind::Llm => {
            let llm = LlmClient::from_env()?;
            info!("🤖 Region data from {} ({})", llm.provider_name(), llm.model());
            Arc::new(LlmRegionProvider::new(llm))
        }
    };
    Ok(provider)
}

pub(crate) fn print_panel(view: &PanelView) {
    let status = match view.status {
        PanelStatus::Placeholder => style("idle").dim(),
        PanelStatus::Loading => style("loading").yellow(),
        PanelStatus::Success => style("ok").green(),
        PanelStatus::Failed => style("failed").red(),
    };
    println!(
        "{} [{}] ({})",
        style(&view.title).bold(),
        status,
        style(&view.source).dim()
    );
    println!("  {}", view.text);
}
