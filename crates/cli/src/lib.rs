//! KrishiMitra CLI library
//!
//! Command implementations behind the `krishimitra` binary

pub mod commands;
pub mod progress;
pub mod scripted_surface;

pub use commands::{AreaCommand, FencesCommand, LocateCommand, SimulateCommand};
pub use scripted_surface::ScriptedSurface;
