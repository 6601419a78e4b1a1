//! Domain Services - pure geofencing logic
//!
//! The area calculator is a set of free functions; the drawing controller
//! is the only stateful service and performs no I/O.

pub mod area_calculator;
pub mod draw_controller;

pub use area_calculator::{area_in_acres, geodesic_area_square_meters, SQUARE_METERS_PER_ACRE};
pub use draw_controller::{DrawController, DrawEvent, DrawListener, DrawState, SurfaceEvent};
