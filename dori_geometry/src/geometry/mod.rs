//! Geometry module: camera frustum, identification regions and their
//! cross-sections.
//!
//! Everything here is a pure computation on plain values. The caller
//! owns the `Logic` engine and every parameter record.

mod names;
mod plane;
mod parameters;
mod logic;
mod intersection;

pub use names::{EdgeName, RegionName, REGION_PPMS, NUMBER_OF_EDGES, NUMBER_OF_REGIONS};
pub use plane::{Plane, Ray, PARALLEL_EPSILON};
pub use parameters::{
    Camera, Entity, Frustum, Parameters, Region, Sensor,
    horizontal_fov_for_fov_width, fov_width_for_horizontal_fov,
};
pub use logic::Logic;
pub use intersection::{intersect, region_edges};
