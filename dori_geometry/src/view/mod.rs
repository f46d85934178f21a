//! View module: geometry of the elevation and plan views.
//!
//! Both views are derived from a computed parameter record and hold
//! world-space points only. Projection to screen space and clipping are
//! left to the caller.

mod side_view;
mod top_view;

pub use side_view::{
    SideView,
    GROUND_OPPOSITE_BISECTOR, GROUND_BISECTOR, GROUND_TOP_EDGE, GROUND_BOTTOM_EDGE,
};
pub use top_view::TopView;
