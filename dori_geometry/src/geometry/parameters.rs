/// Parameter record: the input and the output of `Logic::calculate()`.
///
/// The same record type is used both ways. The caller fills the input
/// fields (camera, sensor, target, lower boundary, horizontal FOV,
/// zNear/zFar); `calculate()` returns a new record with every derived
/// field populated. All lengths are meters, all angles in the record are
/// degrees.

use glam::Vec3;
use crate::error::{log_and_return_error, Error, Result};
use super::names::{NUMBER_OF_EDGES, NUMBER_OF_REGIONS};

const SOURCE: &str = "dori::Parameters";

/// Image sensor resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// width / height
    pub aspect_ratio: f32,
}

impl Sensor {
    /// Create a sensor and derive its aspect ratio.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, aspect_ratio: width / height }
    }
}

/// Pinhole camera located at `(0, 0, height)`, looking toward +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Optical center above ground
    pub height: f32,
    /// Downward pitch of the frustum axis (output, degrees)
    pub tilt_angle: f32,
    pub sensor: Sensor,
}

impl Camera {
    /// Optical center in world space.
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.height)
    }
}

/// View frustum.
///
/// The four arrays are indexed by `EdgeName`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Full horizontal field of view (input, degrees)
    pub horizontal_fov: f32,
    /// Full vertical field of view (output, degrees)
    pub vertical_fov: f32,
    /// Near distance along the viewing axis
    pub z_near: f32,
    /// Far distance along the viewing axis
    pub z_far: f32,
    /// Length of a corner ray up to the near plane
    pub z_near_norm: f32,
    /// Length of a corner ray up to the far plane
    pub z_far_norm: f32,
    /// Unit corner ray directions in world space
    pub edge_directions: [Vec3; NUMBER_OF_EDGES],
    /// Corner rays cut at `z_near_norm`
    pub top_vertices: [Vec3; NUMBER_OF_EDGES],
    /// Corner rays cut by the ground, or at `z_far_norm` when they miss it
    pub bottom_vertices: [Vec3; NUMBER_OF_EDGES],
    /// Ground hit of the forward axis (display reference)
    pub bisector_ray: Vec3,
    /// Ground hit of the backward axis (display reference)
    pub opposite_bisector_ray: Vec3,
}

impl Frustum {
    pub fn half_horizontal_fov_radians(&self) -> f32 {
        0.5 * self.horizontal_fov.to_radians()
    }

    pub fn half_vertical_fov_radians(&self) -> f32 {
        0.5 * self.vertical_fov.to_radians()
    }
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            horizontal_fov: 90.0,
            vertical_fov: 0.0,
            z_near: 0.0001,
            z_far: 1000.0,
            z_near_norm: 0.0,
            z_far_norm: 0.0,
            edge_directions: [Vec3::ZERO; NUMBER_OF_EDGES],
            top_vertices: [Vec3::ZERO; NUMBER_OF_EDGES],
            bottom_vertices: [Vec3::ZERO; NUMBER_OF_EDGES],
            bisector_ray: Vec3::ZERO,
            opposite_bisector_ray: Vec3::ZERO,
        }
    }
}

/// Target or lower boundary: a horizontal plane at `height`, observed
/// at `distance` from the camera foot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Entity {
    pub height: f32,
    /// Ground distance (x coordinate)
    pub distance: f32,
    /// Width of the field of view at the target's distance (target only)
    pub fov_width: f32,
    /// Where each frustum edge crosses the plane `z = height`
    /// (indexed by `EdgeName`)
    pub intersections: [Vec3; NUMBER_OF_EDGES],
}

/// Identification region: the slice of the frustum between two planes
/// perpendicular to its axis.
///
/// When `visible` is false the vertex arrays are zeroed and carry no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    /// Distance along the viewing axis where the required density is met
    pub limit: f32,
    /// `limit` lies within `[z_near, z_far]`
    pub visible: bool,
    pub top_vertices: [Vec3; NUMBER_OF_EDGES],
    pub bottom_vertices: [Vec3; NUMBER_OF_EDGES],
}

/// Full parameter record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub camera: Camera,
    pub frustum: Frustum,
    pub target: Entity,
    pub lower_boundary: Entity,
    /// Indexed by `RegionName`
    pub regions: [Region; NUMBER_OF_REGIONS],
}

impl Default for Parameters {
    /// Reference setup: 1080p camera at 5 m looking at a 2 m target
    /// 5 m away with a 10 m wide field of view.
    fn default() -> Self {
        let target = Entity {
            height: 2.0,
            distance: 5.0,
            fov_width: 10.0,
            ..Default::default()
        };

        let horizontal_fov = 2.0 * (0.5 * target.fov_width / target.distance).atan().to_degrees();

        Self {
            camera: Camera {
                height: 5.0,
                tilt_angle: 0.0,
                sensor: Sensor::new(1920.0, 1080.0),
            },
            frustum: Frustum {
                horizontal_fov,
                ..Default::default()
            },
            target,
            lower_boundary: Entity::default(),
            regions: [Region::default(); NUMBER_OF_REGIONS],
        }
    }
}

/// Horizontal FOV (degrees) that spans `fov_width` meters at
/// `distance` meters.
///
/// # Errors
///
/// `InvalidParameter` if either argument is not a positive finite number.
pub fn horizontal_fov_for_fov_width(fov_width: f32, distance: f32) -> Result<f32> {
    ensure_positive("fov width", fov_width)?;
    ensure_positive("target distance", distance)?;
    Ok(2.0 * (0.5 * fov_width / distance).atan().to_degrees())
}

/// Width (meters) spanned by `horizontal_fov` degrees at `distance`.
///
/// # Errors
///
/// `InvalidParameter` if the FOV is outside `(0, 180)` or the distance
/// is not positive.
pub fn fov_width_for_horizontal_fov(horizontal_fov: f32, distance: f32) -> Result<f32> {
    ensure_fov("horizontal fov", horizontal_fov)?;
    ensure_positive("target distance", distance)?;
    Ok(2.0 * distance * (0.5 * horizontal_fov.to_radians()).tan())
}

impl Parameters {
    /// Set the horizontal FOV from the target's field-of-view width.
    pub fn derive_horizontal_fov(&mut self) -> Result<()> {
        self.frustum.horizontal_fov =
            horizontal_fov_for_fov_width(self.target.fov_width, self.target.distance)?;
        Ok(())
    }

    /// Check the inputs `calculate()` relies on.
    ///
    /// The engine never calls this; it is for callers that accept
    /// parameters from outside.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("camera height", self.camera.height)?;
        ensure_positive("sensor width", self.camera.sensor.width)?;
        ensure_positive("sensor height", self.camera.sensor.height)?;
        ensure_positive("aspect ratio", self.camera.sensor.aspect_ratio)?;
        ensure_fov("horizontal fov", self.frustum.horizontal_fov)?;
        ensure_positive("zNear", self.frustum.z_near)?;
        ensure_positive("zFar", self.frustum.z_far)?;
        if self.frustum.z_far <= self.frustum.z_near {
            return Err(log_and_return_error(
                SOURCE,
                Error::InvalidParameter(format!(
                    "zFar ({}) must exceed zNear ({})",
                    self.frustum.z_far, self.frustum.z_near
                )),
            ));
        }
        ensure_positive("target distance", self.target.distance)?;
        ensure_finite("target height", self.target.height)?;
        ensure_finite("lower boundary height", self.lower_boundary.height)?;
        ensure_finite("lower boundary distance", self.lower_boundary.distance)?;
        Ok(())
    }
}

fn ensure_finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(log_and_return_error(
            SOURCE,
            Error::InvalidParameter(format!("{} is not finite ({})", name, value)),
        ))
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(log_and_return_error(
            SOURCE,
            Error::InvalidParameter(format!("{} must be positive ({})", name, value)),
        ))
    }
}

fn ensure_fov(name: &str, value: f32) -> Result<()> {
    ensure_positive(name, value)?;
    if value < 180.0 {
        Ok(())
    } else {
        Err(log_and_return_error(
            SOURCE,
            Error::InvalidParameter(format!("{} must be below 180 degrees ({})", name, value)),
        ))
    }
}

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod tests;
