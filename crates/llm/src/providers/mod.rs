//! Region data collaborators backing the soil and land-use panels

pub mod canned_region_provider;
pub mod llm_region_provider;

pub use canned_region_provider::CannedRegionProvider;
pub use llm_region_provider::LlmRegionProvider;
