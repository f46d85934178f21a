/// Planes and rays: the two primitives every intersection is built on.
///
/// A plane is stored in signed form (A, B, C, D) where Ax + By + Cz + D = 0
/// and (A, B, C) is a unit normal. A horizontal plane at height `h`
/// therefore has offset `-h`: points above it have positive distance.

use glam::Vec3;

/// Denominators below this magnitude are treated as a ray parallel to
/// the plane.
pub const PARALLEL_EPSILON: f32 = 1e-7;

/// Oriented plane in signed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal (A, B, C)
    pub normal: Vec3,
    /// Signed offset D
    pub offset: f32,
}

impl Plane {
    /// The ground plane `z = 0`, normal pointing up.
    pub const GROUND: Plane = Plane { normal: Vec3::Z, offset: 0.0 };

    /// Plane with the given normal (normalized here) and offset.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal: normal.normalize_or_zero(), offset }
    }

    /// Horizontal plane `z = height`.
    pub fn horizontal(height: f32) -> Self {
        Self { normal: Vec3::Z, offset: -height }
    }

    /// Plane through `point` with the given normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self { normal, offset: -normal.dot(point) }
    }

    /// Signed distance from `point` to the plane (positive on the normal side).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.offset
    }
}

/// Half-line `origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Parameter where the supporting line crosses `plane`.
    ///
    /// `None` when the ray is parallel to the plane or the result is not
    /// finite. Negative values mean the crossing lies behind the origin.
    pub fn intersection_parameter(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -plane.signed_distance(self.origin) / denom;
        t.is_finite().then_some(t)
    }

    /// Forward crossing with `plane` (`t >= 0`), if any.
    pub fn forward_hit(&self, plane: &Plane) -> Option<Vec3> {
        self.intersection_parameter(plane)
            .filter(|t| *t >= 0.0)
            .map(|t| self.point_at(t))
    }

    /// Forward crossing with `plane`, or the point `fallback_length` along
    /// the ray when it does not hit forward.
    pub fn forward_hit_or_scaled(&self, plane: &Plane, fallback_length: f32) -> Vec3 {
        self.forward_hit(plane)
            .unwrap_or_else(|| self.point_at(fallback_length))
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
