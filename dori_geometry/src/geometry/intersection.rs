/// Plane / region cross-sections.
///
/// A visible region is a truncated quad pyramid with 12 finite edges:
/// 4 lateral edges (top[i] → bottom[i]), then the 4 edges of the top
/// quad, then the 4 edges of the bottom quad, each quad walked in
/// `EdgeName` winding order.
///
/// Edge visiting order alone does not give a simple polygon: a
/// horizontal cut through a tilted region crosses two lateral edges and
/// then two bottom-quad edges on the same sides. Since the cut of a
/// convex volume is convex, the crossings are ordered by angle around
/// their centroid, counter-clockwise seen from the side the plane normal
/// points to, starting from the first crossing found.
///
/// Edge cases:
/// - an endpoint at distance exactly 0 counts as being on the positive
///   side, so a segment touching the plane from above emits nothing and
///   one touching from below emits the touching endpoint;
/// - an edge lying in the plane (both distances exactly 0) emits both of
///   its endpoints;
/// - a point reached through several edges (a region vertex on the
///   plane) is kept once;
/// - an invisible region has no geometry and yields nothing.

use std::f32::consts::TAU;
use glam::Vec3;
use super::names::{EdgeName, NUMBER_OF_EDGES};
use super::parameters::Region;
use super::plane::Plane;

/// The 12 edges of `region`, lateral first, then top quad, then bottom quad.
pub fn region_edges(region: &Region) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
    let top = &region.top_vertices;
    let bottom = &region.bottom_vertices;

    let lateral = EdgeName::ALL
        .into_iter()
        .map(move |e| (top[e.index()], bottom[e.index()]));
    let top_quad = EdgeName::ALL
        .into_iter()
        .map(move |e| (top[e.index()], top[e.next().index()]));
    let bottom_quad = EdgeName::ALL
        .into_iter()
        .map(move |e| (bottom[e.index()], bottom[e.next().index()]));

    lateral.chain(top_quad).chain(bottom_quad)
}

/// Cross-section polygon of `region` by `plane`.
///
/// Recomputed on every call. Fewer than 3 points means the plane only
/// touches the region.
pub fn intersect(region: &Region, plane: Plane) -> impl Iterator<Item = Vec3> {
    let mut points: Vec<Vec3> = Vec::with_capacity(NUMBER_OF_EDGES * 3);

    if region.visible {
        for (a, b) in region_edges(region) {
            for point in segment_crossing(a, b, &plane).into_iter().flatten() {
                if !points.iter().any(|q| same_point(*q, point)) {
                    points.push(point);
                }
            }
        }
    }

    order_around_centroid(&mut points, plane.normal);
    points.into_iter()
}

/// Relative tolerance used to merge crossings found through different edges.
const MERGE_EPSILON: f32 = 1e-5;

fn same_point(a: Vec3, b: Vec3) -> bool {
    let scale = a.abs().max_element().max(b.abs().max_element()).max(1.0);
    (a - b).abs().max_element() <= MERGE_EPSILON * scale
}

/// Sort coplanar convex-polygon vertices counter-clockwise about `normal`,
/// keeping `points[0]` first.
fn order_around_centroid(points: &mut [Vec3], normal: Vec3) {
    if points.len() < 3 {
        return;
    }

    let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;
    let u = (points[0] - centroid).normalize_or_zero();
    let v = normal.cross(u);

    let angle = |p: &Vec3| {
        let d = *p - centroid;
        let a = d.dot(v).atan2(d.dot(u));
        if a < 0.0 { a + TAU } else { a }
    };

    points[1..].sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}

/// Crossing of the segment `a → b` with `plane` (at most two points).
fn segment_crossing(a: Vec3, b: Vec3, plane: &Plane) -> [Option<Vec3>; 2] {
    let da = plane.signed_distance(a);
    let db = plane.signed_distance(b);

    if da == 0.0 && db == 0.0 {
        return [Some(a), Some(b)];
    }
    if (da >= 0.0) == (db >= 0.0) {
        return [None, None];
    }

    // Signs differ, so da - db != 0
    let t = da / (da - db);
    [Some(a.lerp(b, t)), None]
}

#[cfg(test)]
#[path = "intersection_tests.rs"]
mod tests;
