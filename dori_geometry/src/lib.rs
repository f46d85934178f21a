/*!
# Dori Geometry

Visibility geometry of a tilted pinhole camera looking at a ground plane,
and the nested identification regions (DORI zones) derived from it.

Given a camera height, a sensor resolution, a horizontal field of view and
a target aim point, the engine:

- tilts the frustum so its upper vertical bisector passes through the target,
- builds the frustum and cuts its edges with the ground, the target height
  and the lower-boundary height,
- splits the frustum into six regions by required pixel density,
- slices any region with an arbitrary plane.

## Architecture

- **Logic**: caller-owned engine, `calculate(&Parameters) -> Parameters`
- **Parameters**: input/output record (camera, frustum, target, lower boundary, regions)
- **intersect**: plane / region cross-section
- **SideView / TopView**: world-space geometry of the two presentation views

Rendering, screen mapping and 2D clipping are left to the caller.
*/

mod error;
pub mod log;
pub mod geometry;
pub mod view;

// Main dori namespace module
pub mod dori {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine
    pub use crate::geometry::Logic;

    // Logging sub-module (types and logger slot)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity, is_enabled,
            log, log_detailed,
        };
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // View sub-module
    pub mod view {
        pub use crate::view::*;
    }
}

// Re-export math library at crate root
pub use glam;
