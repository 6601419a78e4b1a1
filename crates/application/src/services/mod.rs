pub mod geofence_session;
pub mod region_data_dispatcher;
pub mod region_panels;

pub use geofence_session::{GeofenceSession, SelectedArea};
pub use region_data_dispatcher::RegionDataDispatcher;
pub use region_panels::{RegionPanel, RegionPanels};
