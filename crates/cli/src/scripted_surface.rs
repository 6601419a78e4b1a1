//! Headless map surface for driving draw sessions from the command line

use domain::{DrawSurface, Vertex};

/// A map that is always loaded and never moves
#[derive(Debug, Clone)]
pub struct ScriptedSurface {
    center: Vertex,
    polygon_tool: bool,
}

impl ScriptedSurface {
    pub fn new(center: Vertex) -> Self {
        Self {
            center,
            polygon_tool: false,
        }
    }

    pub fn polygon_tool_enabled(&self) -> bool {
        self.polygon_tool
    }
}

impl DrawSurface for ScriptedSurface {
    fn is_ready(&self) -> bool {
        true
    }

    fn view_center(&self) -> Vertex {
        self.center
    }

    fn set_polygon_tool(&mut self, enabled: bool) {
        self.polygon_tool = enabled;
    }
}
