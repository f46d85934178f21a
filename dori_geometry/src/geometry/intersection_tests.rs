use glam::Vec3;
use super::*;
use crate::geometry::Logic;
use crate::geometry::parameters::Parameters;

/// Axis-aligned frustum segment along +x: 2x2 square at x=1, 6x6 at x=3.
fn box_region() -> Region {
    let quad = |x: f32, h: f32| {
        EdgeName::ALL.map(|e| {
            let (sy, sz) = e.local_signs();
            Vec3::new(x, sy * h, sz * h)
        })
    };
    Region {
        limit: 3.0,
        visible: true,
        top_vertices: quad(1.0, 1.0),
        bottom_vertices: quad(3.0, 3.0),
    }
}

fn x_plane(x: f32) -> Plane {
    Plane::new(Vec3::X, -x)
}

/// Whether two non-adjacent sides of the closed polygon cross, in the
/// plane's 2D basis `(u, v)`.
fn self_intersects(points: &[Vec3], u: Vec3, v: Vec3) -> bool {
    let flat: Vec<(f32, f32)> = points.iter().map(|p| (p.dot(u), p.dot(v))).collect();
    let n = flat.len();
    let orient = |a: (f32, f32), b: (f32, f32), c: (f32, f32)| {
        (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
    };

    for i in 0..n {
        for j in (i + 1)..n {
            // Skip sides sharing a vertex
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let (a, b) = (flat[i], flat[(i + 1) % n]);
            let (c, d) = (flat[j], flat[(j + 1) % n]);
            if orient(a, b, c) * orient(a, b, d) < 0.0 && orient(c, d, a) * orient(c, d, b) < 0.0 {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// Edge enumeration
// ============================================================================

#[test]
fn test_region_has_twelve_edges_in_order() {
    let region = box_region();
    let edges: Vec<(Vec3, Vec3)> = region_edges(&region).collect();

    assert_eq!(edges.len(), 12);
    // Lateral edges first
    for (i, (a, b)) in edges[..4].iter().enumerate() {
        assert_eq!(*a, region.top_vertices[i]);
        assert_eq!(*b, region.bottom_vertices[i]);
    }
    // Then the top quad, closing back on the first corner
    assert_eq!(edges[7], (region.top_vertices[3], region.top_vertices[0]));
    assert_eq!(edges[8], (region.bottom_vertices[0], region.bottom_vertices[1]));
}

// ============================================================================
// intersect
// ============================================================================

#[test]
fn test_plane_missing_region_is_empty() {
    let region = box_region();

    assert_eq!(intersect(&region, x_plane(10.0)).count(), 0);
    assert_eq!(intersect(&region, x_plane(-1.0)).count(), 0);
}

#[test]
fn test_plane_through_middle_cuts_lateral_edges() {
    let region = box_region();
    let points: Vec<Vec3> = intersect(&region, x_plane(2.0)).collect();

    // Counter-clockwise about +x from the first lateral crossing
    let expected = [EdgeName::TopLeft, EdgeName::TopRight, EdgeName::BottomRight, EdgeName::BottomLeft];
    assert_eq!(points.len(), 4);
    for (p, edge) in points.iter().zip(expected) {
        let (sy, sz) = edge.local_signs();
        assert!(p.abs_diff_eq(Vec3::new(2.0, 2.0 * sy, 2.0 * sz), 1e-5));
    }
    // Opposite lateral edges give opposite points
    assert!((points[0] + points[2]).abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-5));
    assert!((points[1] + points[3]).abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-5));
}

#[test]
fn test_horizontal_plane_cut_is_a_simple_polygon() {
    let region = box_region();
    // z = 0 splits the box: the top-quad crossings come first in edge
    // order, and both quads are crossed on the same two sides
    let points: Vec<Vec3> = intersect(&region, Plane::horizontal(0.0)).collect();

    assert_eq!(points.len(), 4);
    assert!(points.iter().all(|p| p.z.abs() < 1e-6));
    let expected = [
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(3.0, -3.0, 0.0),
        Vec3::new(3.0, 3.0, 0.0),
    ];
    for (p, e) in points.iter().zip(expected) {
        assert!(p.abs_diff_eq(e, 1e-5), "{:?} != {:?}", p, e);
    }
    assert!(!self_intersects(&points, Vec3::X, Vec3::Y));
}

#[test]
fn test_coincident_edges_emit_each_vertex_once() {
    let region = box_region();
    // The top quad lies entirely in x = 1
    let points: Vec<Vec3> = intersect(&region, x_plane(1.0)).collect();

    assert_eq!(points.len(), 4);
    assert_eq!(points[0], region.top_vertices[EdgeName::TopLeft.index()]);
    assert_eq!(points[1], region.top_vertices[EdgeName::TopRight.index()]);
    assert_eq!(points[2], region.top_vertices[EdgeName::BottomRight.index()]);
    assert_eq!(points[3], region.top_vertices[EdgeName::BottomLeft.index()]);
}

#[test]
fn test_touching_from_below_merges_shared_vertices() {
    let region = box_region();
    // Bottom quad lies in x = 3, everything else is on the negative side.
    // Lateral edges touch at their bottom vertex, which the coincident
    // quad edges emit again.
    let points: Vec<Vec3> = intersect(&region, x_plane(3.0)).collect();

    assert_eq!(points.len(), 4);
    for bottom in &region.bottom_vertices {
        assert_eq!(points.iter().filter(|p| p.abs_diff_eq(*bottom, 1e-5)).count(), 1);
    }
    assert!(!self_intersects(&points, Vec3::Y, Vec3::Z));
}

#[test]
fn test_oblique_plane_cut_is_a_simple_polygon() {
    let region = box_region();
    let normal = Vec3::new(1.0, 0.4, 0.7).normalize();
    let plane = Plane::from_point_normal(Vec3::new(2.0, 0.0, 0.0), normal);
    let points: Vec<Vec3> = intersect(&region, plane).collect();

    assert!(points.len() >= 3);
    assert!(points.iter().all(|p| plane.signed_distance(*p).abs() < 1e-4));
    let u = normal.any_orthonormal_vector();
    assert!(!self_intersects(&points, u, normal.cross(u)));
}

#[test]
fn test_invisible_region_yields_nothing() {
    let region = Region::default();
    assert_eq!(intersect(&region, Plane::GROUND).count(), 0);
}

#[test]
fn test_intersect_is_recomputed_each_call() {
    let region = box_region();
    let first: Vec<Vec3> = intersect(&region, x_plane(2.5)).collect();
    let second: Vec<Vec3> = intersect(&region, x_plane(2.5)).collect();
    assert_eq!(first, second);
}

// ============================================================================
// Against computed regions
// ============================================================================

#[test]
fn test_ground_slices_of_computed_regions() {
    let output = Logic::new().calculate(&Parameters::default());
    let ground = Plane::horizontal(output.lower_boundary.height);

    let mut non_empty = 0;
    for region in &output.regions {
        let points: Vec<Vec3> = intersect(region, ground).collect();
        assert!(points.iter().all(|p| p.z.abs() < 1e-3));
        if !points.is_empty() {
            non_empty += 1;
        }
    }
    assert!(non_empty > 0);

    for region in &output.regions {
        let points: Vec<Vec3> = intersect(region, ground).collect();
        assert!(!self_intersects(&points, Vec3::X, Vec3::Y));
    }

    // The nearest region ends about a meter from a camera 5 m up
    let nearest = &output.regions[0];
    assert_eq!(intersect(nearest, ground).count(), 0);
}
