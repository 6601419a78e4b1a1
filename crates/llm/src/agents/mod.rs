pub mod location_resolver;

pub use location_resolver::{LocationAddress, LocationResolver};
