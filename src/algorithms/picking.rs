use crate::geometry::math::dist_sq_to_edge;
use crate::geometry::tolerance::NEAR_TOL;
use crate::model::Point;
use crate::Slider;

// Both scans use a fixed order: segment 0..N-1, then point/edge 0..M-1 within
// each segment. The first hit within tolerance wins, not the nearest; callers
// rely on this deterministic tie-break, so do not change it to best-match.

pub fn near_point_impl(s: &Slider, p: Point) -> Option<(usize, usize)> {
    let tol2 = NEAR_TOL * NEAR_TOL;
    for (si, seg) in s.segments.iter().enumerate() {
        for (pi, q) in seg.points().iter().enumerate() {
            if q.distance_sq(p) <= tol2 {
                return Some((si, pi));
            }
        }
    }
    None
}

pub fn near_edge_impl(s: &Slider, p: Point) -> Option<(usize, usize)> {
    let tol2 = NEAR_TOL * NEAR_TOL;
    for (si, seg) in s.segments.iter().enumerate() {
        let pts = seg.points();
        // Edge i connects point i and point i+1; no edge spans two segments.
        for ei in 0..pts.len().saturating_sub(1) {
            if dist_sq_to_edge(p, pts[ei], pts[ei + 1]) <= tol2 {
                return Some((si, ei));
            }
        }
    }
    None
}
