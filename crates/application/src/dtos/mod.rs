//! Data Transfer Objects handed to renderers

pub mod panel_view;

pub use panel_view::{PanelStatus, PanelView};
