pub mod config;
pub mod structured_logging;

pub use config::{GeofenceConfig, MapViewConfig, RegionProviderKind};
pub use structured_logging::{
    init_structured_logging, ExecutionContext, LoggingConfig, OperationTimer, PerformanceMetrics,
    RequestContext, StructuredLogEntry,
};
