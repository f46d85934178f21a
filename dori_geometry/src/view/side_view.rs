/// SideView: elevation (x–z) geometry of a computed parameter record.
///
/// All points are world-space `Vec3` with `y = 0` for the points that are
/// defined in the elevation plane. Mapping to screen coordinates and
/// clipping the region outlines against `roi()` belong to the
/// presentation layer.

use glam::Vec3;
use crate::geometry::{EdgeName, Parameters, NUMBER_OF_REGIONS};

/// Ground reference points, in drawing order.
pub const GROUND_OPPOSITE_BISECTOR: usize = 0;
pub const GROUND_BISECTOR: usize = 1;
pub const GROUND_TOP_EDGE: usize = 2;
pub const GROUND_BOTTOM_EDGE: usize = 3;

/// Elevation view geometry. Ephemeral: rebuilt after every `calculate()`.
#[derive(Debug, Clone)]
pub struct SideView {
    camera: Vec3,
    tilt_angle: f32,
    target: Vec3,
    lower_boundary: Vec3,
    ground: [Vec3; 4],
    roi: [Vec3; 4],
    regions: [Option<[Vec3; 4]>; NUMBER_OF_REGIONS],
}

impl SideView {
    /// Build the elevation geometry from an output record.
    pub fn new(output: &Parameters) -> Self {
        let target = &output.target;
        let lower_boundary = &output.lower_boundary;
        let frustum = &output.frustum;

        let at = |distance: f32, height: f32| Vec3::new(distance, 0.0, height);

        // Target column down to the lower boundary
        let roi = [
            at(target.distance, target.height),
            at(target.distance, lower_boundary.height),
            at(lower_boundary.distance, lower_boundary.height),
            at(lower_boundary.distance, target.height),
        ];

        let regions = output.regions.map(|region| {
            region.visible.then(|| {
                [
                    region.bottom_vertices[EdgeName::TopLeft.index()],
                    region.top_vertices[EdgeName::TopLeft.index()],
                    region.top_vertices[EdgeName::BottomRight.index()],
                    region.bottom_vertices[EdgeName::BottomRight.index()],
                ]
            })
        });

        Self {
            camera: output.camera.position(),
            tilt_angle: output.camera.tilt_angle,
            target: at(target.distance, target.height),
            lower_boundary: at(lower_boundary.distance, lower_boundary.height),
            ground: [
                frustum.opposite_bisector_ray,
                frustum.bisector_ray,
                frustum.bottom_vertices[EdgeName::TopLeft.index()],
                frustum.bottom_vertices[EdgeName::BottomLeft.index()],
            ],
            roi,
            regions,
        }
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    /// Tilt angle in degrees.
    pub fn tilt_angle(&self) -> f32 {
        self.tilt_angle
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn lower_boundary(&self) -> Vec3 {
        self.lower_boundary
    }

    /// Ground reference points, indexed by the `GROUND_*` constants.
    pub fn ground(&self) -> &[Vec3; 4] {
        &self.ground
    }

    /// Region of interest: the target column between the lower boundary
    /// and the target.
    pub fn roi(&self) -> &[Vec3; 4] {
        &self.roi
    }

    /// Outline of each region, `None` when it is not visible.
    pub fn regions(&self) -> &[Option<[Vec3; 4]>; NUMBER_OF_REGIONS] {
        &self.regions
    }
}

#[cfg(test)]
#[path = "side_view_tests.rs"]
mod tests;
