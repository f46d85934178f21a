//! Integration tests for the geometry engine
//!
//! Exercise the public `dori` namespace end to end: parameters in,
//! frustum, regions and view geometry out.
//!
//! Run with: cargo test --test engine_integration_tests

use dori_geometry::dori::geometry::{
    horizontal_fov_for_fov_width, intersect, EdgeName, Parameters, Plane, RegionName,
    NUMBER_OF_REGIONS,
};
use dori_geometry::dori::view::{SideView, TopView};
use dori_geometry::dori::{Error, Logic};
use dori_geometry::glam::Vec3;

const EPS: f32 = 1e-3;

fn reference_parameters() -> Parameters {
    let mut params = Parameters::default();
    params.camera.height = 5.0;
    params.target.height = 2.0;
    params.target.distance = 5.0;
    params.target.fov_width = 10.0;
    params.lower_boundary.height = 0.0;
    params.lower_boundary.distance = 0.0;
    params.derive_horizontal_fov().unwrap();
    params
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_integration_reference_scenario() {
    let params = reference_parameters();
    params.validate().unwrap();

    let output = Logic::new().calculate(&params);

    // Target on the upper vertical bisector
    let tilt = output.camera.tilt_angle.to_radians();
    let half_v = output.frustum.half_vertical_fov_radians();
    let aim = Logic::tilt_rotation(tilt) * Vec3::new(1.0, 0.0, half_v.tan());
    let at_target = output.camera.position() + aim * (5.0 / aim.x);
    assert!(at_target.abs_diff_eq(Vec3::new(5.0, 0.0, 2.0), EPS));

    // Lower boundary on the ground sees the frustum footprint
    for edge in EdgeName::ALL {
        let i = edge.index();
        assert!(output.lower_boundary.intersections[i].abs_diff_eq(output.frustum.bottom_vertices[i], 1e-4));
    }
    assert!(output.lower_boundary.distance <= output.target.distance);
}

#[test]
fn test_integration_regions_chain_and_round_trip() {
    let output = Logic::new().calculate(&reference_parameters());
    let camera = output.camera.position();
    let axis = Logic::tilt_rotation(output.camera.tilt_angle.to_radians()) * Vec3::X;

    assert_eq!(output.regions.len(), NUMBER_OF_REGIONS);
    for name in RegionName::ALL {
        let region = &output.regions[name.index()];
        assert!(region.visible, "{} should be visible", name.label());

        // Depth of the bottom cut along the axis reproduces the limit
        for bottom in &region.bottom_vertices {
            assert!(((*bottom - camera).dot(axis) - region.limit).abs() < 1e-2);
        }

        if let Some(previous) = name.previous() {
            let previous = &output.regions[previous.index()];
            assert!(previous.limit < region.limit);
            assert_eq!(previous.bottom_vertices, region.top_vertices);
        }
    }
}

#[test]
fn test_integration_out_of_range_regions() {
    let mut params = reference_parameters();
    params.frustum.z_near = 1.0;
    params.frustum.z_far = 10.0;

    let output = Logic::new().calculate(&params);
    let visible: Vec<bool> = output.regions.iter().map(|r| r.visible).collect();

    assert_eq!(visible, vec![false, true, true, false, false, false]);
    for region in output.regions.iter().filter(|r| !r.visible) {
        assert!(region.limit.is_finite());
        assert!(region.top_vertices.iter().chain(&region.bottom_vertices).all(|p| p.is_finite()));
    }
}

#[test]
fn test_integration_top_view_slices_match_intersect() {
    let mut params = reference_parameters();
    params.lower_boundary.height = 0.5;
    let output = Logic::new().calculate(&params);
    let view = TopView::new(&output);

    let plane = Plane::horizontal(output.lower_boundary.height);
    for (slice, region) in view.regions().iter().zip(&output.regions) {
        let expected: Vec<Vec3> = intersect(region, plane).collect();
        assert_eq!(*slice, expected);
    }
}

#[test]
fn test_integration_side_view_tracks_output() {
    let output = Logic::new().calculate(&reference_parameters());
    let view = SideView::new(&output);

    assert_eq!(view.tilt_angle(), output.camera.tilt_angle);
    assert!(view.regions().iter().all(|outline| outline.is_some()));
}

#[test]
fn test_integration_fov_width_errors() {
    let err = horizontal_fov_for_fov_width(10.0, -5.0).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert!(format!("{}", err).contains("target distance"));

    let idx = RegionName::try_from(9usize).unwrap_err();
    assert!(matches!(idx, Error::InvalidIndex(_)));
}
