//! Domain Entities - geographic shapes and the objects keyed off them

mod area_identifier;
mod draw_session;
mod fence_record;
mod region_query;
mod ring;
mod vertex;

pub use area_identifier::{AreaIdentifier, IdentifierScope};
pub use draw_session::DrawSession;
pub use fence_record::{default_fences, FenceRecord};
pub use region_query::RegionQueryResult;
pub use ring::{Polygon, Ring};
pub use vertex::Vertex;
