/// TopView: plan (x–y) geometry of a computed parameter record.
///
/// Regions are re-sliced at the lower-boundary height so the plan shows
/// what the camera resolves at the lowest height of interest.

use glam::Vec3;
use crate::geometry::{intersect, EdgeName, Parameters, Plane, NUMBER_OF_EDGES, NUMBER_OF_REGIONS};

/// Plan view geometry. Ephemeral: rebuilt after every `calculate()`.
#[derive(Debug, Clone)]
pub struct TopView {
    target_distance: f32,
    fov_width: f32,
    ground: [Vec3; NUMBER_OF_EDGES],
    target: [Vec3; NUMBER_OF_EDGES],
    lower_boundary: [Vec3; NUMBER_OF_EDGES],
    target_roi: Vec<Vec3>,
    regions: [Vec<Vec3>; NUMBER_OF_REGIONS],
}

impl TopView {
    /// Build the plan geometry from an output record.
    pub fn new(output: &Parameters) -> Self {
        let target = &output.target.intersections;

        // A camera at or below the target sees the target plane only
        // through its upper edges: a wedge from the camera foot.
        let target_roi = if output.camera.height <= output.target.height {
            vec![
                Vec3::new(0.0, 0.0, output.target.height),
                target[EdgeName::TopLeft.index()],
                target[EdgeName::TopRight.index()],
            ]
        } else {
            target.to_vec()
        };

        let plane = Plane::horizontal(output.lower_boundary.height);
        let regions = output
            .regions
            .each_ref()
            .map(|region| intersect(region, plane).collect::<Vec<Vec3>>());

        Self {
            target_distance: output.target.distance,
            fov_width: output.target.fov_width,
            ground: output.frustum.bottom_vertices,
            target: *target,
            lower_boundary: output.lower_boundary.intersections,
            target_roi,
            regions,
        }
    }

    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    pub fn fov_width(&self) -> f32 {
        self.fov_width
    }

    /// Frustum footprint on the ground.
    pub fn ground(&self) -> &[Vec3; NUMBER_OF_EDGES] {
        &self.ground
    }

    /// Frustum cut at the target height.
    pub fn target(&self) -> &[Vec3; NUMBER_OF_EDGES] {
        &self.target
    }

    /// Frustum cut at the lower-boundary height. This quad is also the
    /// lower-boundary region of interest; clipping it against
    /// `target_roi()` is left to the caller.
    pub fn lower_boundary(&self) -> &[Vec3; NUMBER_OF_EDGES] {
        &self.lower_boundary
    }

    /// Visible part of the target plane (3 or 4 points).
    pub fn target_roi(&self) -> &[Vec3] {
        &self.target_roi
    }

    /// Region cross-sections at the lower-boundary height, as simple
    /// polygons wound counter-clockwise seen from above. Empty when a
    /// region does not reach that height.
    pub fn regions(&self) -> &[Vec<Vec3>; NUMBER_OF_REGIONS] {
        &self.regions
    }
}

#[cfg(test)]
#[path = "top_view_tests.rs"]
mod tests;
