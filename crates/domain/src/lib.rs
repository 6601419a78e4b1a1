//! Domain Layer - KrishiMitra geofencing core
//!
//! Contains ONLY pure logic, no dependencies on:
//! - Infrastructure (HTTP clients, LLM providers)
//! - Frameworks (map rendering, CLI, UI)
//! - Runtimes (the region data contract is an async trait, nothing more)
//!
//! Layout:
//! - Entities: Vertex, Ring, Polygon, AreaIdentifier, RegionQueryResult, DrawSession
//! - Value Objects: QueryKind, QueryState
//! - Services: geodesic area calculator, drawing controller state machine
//! - Repository Abstractions: DrawSurface, RegionDataProvider

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export core domain types
pub use entities::{
    default_fences, AreaIdentifier, DrawSession, FenceRecord, IdentifierScope, Polygon,
    RegionQueryResult, Ring, Vertex,
};
pub use errors::{DomainError, DomainResult, ErrorCategory, ProviderError, ProviderResult};
pub use repositories::{DrawSurface, RegionDataProvider, RegionRequest};
pub use services::{
    area_in_acres, geodesic_area_square_meters, DrawController, DrawEvent, DrawListener,
    DrawState, SurfaceEvent, SQUARE_METERS_PER_ACRE,
};
pub use value_objects::{QueryKind, QueryState};

/// Area expressed in acres
pub type Acres = f64;
