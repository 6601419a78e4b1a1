//! Repository Abstractions - ports to the map surface and region data services
//!
//! Domain code depends only on these traits; concrete map libraries and
//! data services live outside this crate.

mod draw_surface;
mod region_data;

pub use draw_surface::DrawSurface;
pub use region_data::{RegionDataProvider, RegionRequest};
