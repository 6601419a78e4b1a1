//! DrawSurface - the map capability the drawing controller drives

use crate::entities::Vertex;

/// Narrow capability of an interactive map
///
/// Vertex placement, completion and deletion arrive at the controller as
/// [`SurfaceEvent`](crate::services::SurfaceEvent)s; this trait covers what
/// the controller needs to ask of, or tell, the surface.
pub trait DrawSurface {
    /// Whether the map is loaded and usable (e.g. location permission granted)
    fn is_ready(&self) -> bool;

    /// Current view center, used for initial positioning
    fn view_center(&self) -> Vertex;

    /// Show or hide the polygon drawing tool
    fn set_polygon_tool(&mut self, enabled: bool);
}

impl<T: DrawSurface + ?Sized> DrawSurface for Box<T> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn view_center(&self) -> Vertex {
        (**self).view_center()
    }

    fn set_polygon_tool(&mut self, enabled: bool) {
        (**self).set_polygon_tool(enabled)
    }
}
