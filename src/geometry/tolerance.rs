// Centralized tolerances for hit-testing

/// Pick radius for near-point/near-edge queries, in grid units. A fixed
/// configuration constant, never user-supplied.
pub const NEAR_TOL: f32 = 8.0;

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}
