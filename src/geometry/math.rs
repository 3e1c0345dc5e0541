use super::tolerance::clamp01;
use crate::model::Point;

/// Squared distance from `p` to the line segment `a`-`b`, with the projection
/// clamped to [0, 1] so positions past either endpoint degrade to plain
/// point-to-endpoint distance.
pub fn dist_sq_to_edge(p: Point, a: Point, b: Point) -> f32 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let wx = p.x - a.x;
    let wy = p.y - a.y;
    let vv = vx * vx + vy * vy;
    let t = if vv > 0.0 {
        clamp01((wx * vx + wy * vy) / vv)
    } else {
        0.0
    };
    let projx = a.x + t * vx;
    let projy = a.y + t * vy;
    let dx = p.x - projx;
    let dy = p.y - projy;
    dx * dx + dy * dy
}
