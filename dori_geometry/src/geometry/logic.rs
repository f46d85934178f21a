/// Logic: frustum and identification region geometry.
///
/// World frame: ground is `z = 0`, the camera sits at `(0, 0, height)`
/// and looks toward +x. Camera-local frame: +x forward, +y left, +z up.
/// The frustum is built in the local frame and pitched down about +y by
/// the tilt angle.
///
/// `Logic` is a caller-owned value. `calculate()` is a pure function of
/// its input: it reads a parameter record and returns a new one.

use glam::{Quat, Vec3};
use super::names::{EdgeName, RegionName, NUMBER_OF_EDGES, NUMBER_OF_REGIONS};
use super::parameters::{Camera, Entity, Frustum, Parameters, Region};
use super::plane::{Plane, Ray};

const SOURCE: &str = "dori::Logic";

/// Frustum/region geometry engine.
#[derive(Debug, Clone, Copy)]
pub struct Logic {
    ground: Plane,
}

impl Default for Logic {
    fn default() -> Self {
        Self::new()
    }
}

impl Logic {
    pub fn new() -> Self {
        Self { ground: Plane::GROUND }
    }

    /// The ground plane used for frustum footprints.
    pub fn ground(&self) -> &Plane {
        &self.ground
    }

    /// Rotation that pitches the camera-local frame down by `tilt_radians`.
    pub fn tilt_rotation(tilt_radians: f32) -> Quat {
        Quat::from_rotation_y(tilt_radians)
    }

    /// Half vertical FOV (radians) for a half horizontal FOV and a sensor
    /// aspect ratio.
    pub fn half_vertical_fov(half_horizontal_fov_radians: f32, aspect_ratio: f32) -> f32 {
        (half_horizontal_fov_radians.tan() / aspect_ratio).atan()
    }

    /// Tilt (radians) that aims the upper vertical bisector of the frustum
    /// (the top-centre ray) at `(target_distance, target_height)`.
    ///
    /// The frustum axis then sits `half_vertical_fov` lower.
    pub fn tilt_for_target(
        half_vertical_fov_radians: f32,
        camera_height: f32,
        target_distance: f32,
        target_height: f32,
    ) -> f32 {
        half_vertical_fov_radians - (target_height - camera_height).atan2(target_distance)
    }

    /// Compute every derived quantity for `input`.
    ///
    /// Never fails: rays that miss a plane forward are cut at the far
    /// corner distance, and regions outside `[z_near, z_far]` are marked
    /// invisible.
    pub fn calculate(&self, input: &Parameters) -> Parameters {
        let sensor = input.camera.sensor;
        let camera_height = input.camera.height;
        let target_distance = input.target.distance;
        let target_height = input.target.height;
        let lower_boundary_height = input
            .lower_boundary
            .height
            .min(target_height.min(camera_height))
            .max(0.0);
        let camera_position = input.camera.position();

        let half_horizontal_fov = input.frustum.half_horizontal_fov_radians();
        let half_vertical_fov = Self::half_vertical_fov(half_horizontal_fov, sensor.aspect_ratio);

        let tilt = Self::tilt_for_target(half_vertical_fov, camera_height, target_distance, target_height);
        let rotation = Self::tilt_rotation(tilt);

        let frustum = self.build_frustum(
            camera_position,
            rotation,
            half_horizontal_fov,
            half_vertical_fov,
            input.frustum.z_near,
            input.frustum.z_far,
        );

        crate::dori_debug!(
            SOURCE,
            "tilt {:.3} deg, fov {:.3} x {:.3} deg",
            tilt.to_degrees(),
            frustum.horizontal_fov,
            frustum.vertical_fov
        );

        let target = Entity {
            intersections: Self::horizontal_intersections(&frustum, camera_position, target_height),
            ..input.target
        };

        let lower_boundary_intersections =
            Self::horizontal_intersections(&frustum, camera_position, lower_boundary_height);
        let lower_boundary = Entity {
            height: lower_boundary_height,
            distance: target_distance
                .min(lower_boundary_intersections[EdgeName::BottomLeft.index()].x),
            intersections: lower_boundary_intersections,
            ..input.lower_boundary
        };

        let regions = Self::segment_regions(
            &frustum,
            camera_position,
            rotation,
            sensor.width,
            half_horizontal_fov,
        );

        Parameters {
            camera: Camera {
                height: camera_height,
                tilt_angle: tilt.to_degrees(),
                sensor,
            },
            frustum,
            target,
            lower_boundary,
            regions,
        }
    }

    fn build_frustum(
        &self,
        camera_position: Vec3,
        rotation: Quat,
        half_horizontal_fov: f32,
        half_vertical_fov: f32,
        z_near: f32,
        z_far: f32,
    ) -> Frustum {
        let tan_h = half_horizontal_fov.tan();
        let tan_v = half_vertical_fov.tan();

        // Corner ray lengths from the camera to the near/far planes
        let z_near_norm = Vec3::new(z_near, z_near * tan_h, z_near * tan_v).length();
        let z_far_norm = Vec3::new(z_far, z_far * tan_h, z_far * tan_v).length();

        let mut edge_directions = [Vec3::ZERO; NUMBER_OF_EDGES];
        let mut top_vertices = [Vec3::ZERO; NUMBER_OF_EDGES];
        let mut bottom_vertices = [Vec3::ZERO; NUMBER_OF_EDGES];

        for edge in EdgeName::ALL {
            let (sy, sz) = edge.local_signs();
            let direction = rotation * Vec3::new(1.0, sy * tan_h, sz * tan_v).normalize();
            let i = edge.index();

            edge_directions[i] = direction;
            top_vertices[i] = camera_position + z_near_norm * direction;
            bottom_vertices[i] = Ray::new(camera_position, direction)
                .forward_hit_or_scaled(&self.ground, z_far_norm);
        }

        let bisector = |local: Vec3| {
            Ray::new(camera_position, rotation * local).forward_hit_or_scaled(&self.ground, z_far)
        };

        Frustum {
            horizontal_fov: 2.0 * half_horizontal_fov.to_degrees(),
            vertical_fov: 2.0 * half_vertical_fov.to_degrees(),
            z_near,
            z_far,
            z_near_norm,
            z_far_norm,
            edge_directions,
            top_vertices,
            bottom_vertices,
            bisector_ray: bisector(Vec3::X),
            opposite_bisector_ray: bisector(Vec3::NEG_X),
        }
    }

    /// Where each frustum edge crosses the horizontal plane `z = height`.
    fn horizontal_intersections(
        frustum: &Frustum,
        camera_position: Vec3,
        height: f32,
    ) -> [Vec3; NUMBER_OF_EDGES] {
        let plane = Plane::horizontal(height);
        frustum.edge_directions.map(|direction| {
            Ray::new(camera_position, direction).forward_hit_or_scaled(&plane, frustum.z_far_norm)
        })
    }

    /// Slice the frustum into the identification regions.
    ///
    /// Each region ends on a plane perpendicular to the tilted axis at
    /// its `limit`, and starts where the previous visible region ended
    /// (or at the near plane).
    fn segment_regions(
        frustum: &Frustum,
        camera_position: Vec3,
        rotation: Quat,
        sensor_width: f32,
        half_horizontal_fov: f32,
    ) -> [Region; NUMBER_OF_REGIONS] {
        let axis = rotation * Vec3::X;
        let mut regions = [Region::default(); NUMBER_OF_REGIONS];
        let mut previous_bottom = frustum.top_vertices;

        for name in RegionName::ALL {
            let limit = name.limit(sensor_width, half_horizontal_fov);

            // NaN is never contained, so it lands here too
            if !(frustum.z_near..=frustum.z_far).contains(&limit) {
                crate::dori_trace!(
                    SOURCE,
                    "{} out of range (limit {}, range {}..={})",
                    name.label(),
                    limit,
                    frustum.z_near,
                    frustum.z_far
                );
                continue;
            }

            // Every edge leans forward along the axis and limit >= z_near > 0,
            // so each ray hits this plane ahead of the camera: the far
            // fallback is never taken here.
            let plane = Plane::from_point_normal(camera_position + limit * axis, -axis);
            let bottom_vertices = frustum.edge_directions.map(|direction| {
                Ray::new(camera_position, direction).forward_hit_or_scaled(&plane, frustum.z_far_norm)
            });

            regions[name.index()] = Region {
                limit,
                visible: true,
                top_vertices: previous_bottom,
                bottom_vertices,
            };
            previous_bottom = bottom_vertices;
        }

        regions
    }
}

#[cfg(test)]
#[path = "logic_tests.rs"]
mod tests;
