/// Edge and region names.
///
/// Both enumerations double as array indices: the ordinal of a variant
/// is its position in every `[_; 4]` edge array and in the `[_; 6]`
/// region array. `ALL` lists the variants in that order.

use crate::error::{log_and_return_error, Error, Result};

/// Number of frustum edges (corner rays).
pub const NUMBER_OF_EDGES: usize = 4;

/// Number of identification regions.
pub const NUMBER_OF_REGIONS: usize = 6;

/// Frustum corner rays, named in camera-local space.
///
/// Camera-local axes: +x forward, +y left, +z up. The winding
/// (top-left, bottom-left, bottom-right, top-right) is shared by the
/// frustum, target, lower boundary and region vertex arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeName {
    TopLeft = 0,
    BottomLeft = 1,
    BottomRight = 2,
    TopRight = 3,
}

impl EdgeName {
    pub const ALL: [EdgeName; NUMBER_OF_EDGES] = [
        EdgeName::TopLeft,
        EdgeName::BottomLeft,
        EdgeName::BottomRight,
        EdgeName::TopRight,
    ];

    /// Array index of this edge.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Signs of the (y, z) components of the camera-local corner ray.
    pub fn local_signs(self) -> (f32, f32) {
        match self {
            EdgeName::TopLeft => (1.0, 1.0),
            EdgeName::BottomLeft => (1.0, -1.0),
            EdgeName::BottomRight => (-1.0, -1.0),
            EdgeName::TopRight => (-1.0, 1.0),
        }
    }

    /// Next edge in winding order (wraps around).
    pub fn next(self) -> EdgeName {
        Self::ALL[(self.index() + 1) % NUMBER_OF_EDGES]
    }
}

impl TryFrom<usize> for EdgeName {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            log_and_return_error(
                "dori::EdgeName",
                Error::InvalidIndex(format!("edge {} (expected 0..{})", index, NUMBER_OF_EDGES)),
            )
        })
    }
}

/// Identification regions, nearest (strictest) first.
///
/// Each region requires a minimum pixel density on the target. The
/// values are the DORI levels of IEC 62676-4 plus the two outer levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionName {
    StrongIdentification = 0,
    Identification = 1,
    Recognition = 2,
    Observation = 3,
    Detection = 4,
    Monitoring = 5,
}

/// Required pixels per meter, indexed by `RegionName`.
pub const REGION_PPMS: [f32; NUMBER_OF_REGIONS] = [1000.0, 250.0, 125.0, 62.5, 25.0, 12.5];

impl RegionName {
    pub const ALL: [RegionName; NUMBER_OF_REGIONS] = [
        RegionName::StrongIdentification,
        RegionName::Identification,
        RegionName::Recognition,
        RegionName::Observation,
        RegionName::Detection,
        RegionName::Monitoring,
    ];

    /// Array index of this region.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Required pixel density (pixels per meter).
    pub fn required_ppm(self) -> f32 {
        REGION_PPMS[self.index()]
    }

    /// Region preceding this one, if any.
    pub fn previous(self) -> Option<RegionName> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Distance along the viewing axis where the pixel density drops to
    /// `required_ppm`.
    ///
    /// At depth `d` the sensor covers `2·d·tan(half_hfov)` meters across
    /// `sensor_width` pixels.
    pub fn limit(self, sensor_width: f32, half_horizontal_fov_radians: f32) -> f32 {
        0.5 * (sensor_width / self.required_ppm()) / half_horizontal_fov_radians.tan()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RegionName::StrongIdentification => "Strong identification",
            RegionName::Identification => "Identification",
            RegionName::Recognition => "Recognition",
            RegionName::Observation => "Observation",
            RegionName::Detection => "Detection",
            RegionName::Monitoring => "Monitoring",
        }
    }
}

impl TryFrom<usize> for RegionName {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            log_and_return_error(
                "dori::RegionName",
                Error::InvalidIndex(format!("region {} (expected 0..{})", index, NUMBER_OF_REGIONS)),
            )
        })
    }
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
