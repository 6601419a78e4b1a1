//! # Application Layer
//!
//! Wires the draw controller to the region data collaborator:
//! - `RegionDataDispatcher` issues soil and land-use queries as background tasks
//! - `RegionPanels` keeps per-panel state and drops stale results
//! - `GeofenceSession` binds controller callbacks to both
//!
//! ## Dependency Direction
//!
//! ```text
//! cli → application → domain
//!                   → common
//! ```

pub mod dtos;
pub mod services;

pub use dtos::{PanelStatus, PanelView};
pub use services::{GeofenceSession, RegionDataDispatcher, RegionPanel, RegionPanels, SelectedArea};
