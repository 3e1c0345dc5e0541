use serde::{Deserialize, Serialize};

/// A grid-snapped coordinate. Snapping happens upstream, so exact float
/// equality is meaningful and the engine never rounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        self.distance_sq(other).sqrt()
    }

    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// One continuous run of drawn points. Points are never reordered; a segment
/// holds at least one point at all times (an emptied segment is removed from
/// the path).
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub(crate) points: Vec<Point>,
    pub(crate) through_last: bool,
}

impl Segment {
    pub(crate) fn new(p: Point) -> Self {
        Segment {
            points: vec![p],
            through_last: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, idx: usize) -> Option<Point> {
        self.points.get(idx).copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the joint between this segment's last point and the next
    /// segment's first point renders as a smooth pass-through.
    pub fn through_last(&self) -> bool {
        self.through_last
    }

    /// True iff the segment has at least two points and `p` equals the point
    /// at index `len - 2` exactly.
    pub fn is_second_last(&self, p: Point) -> bool {
        let n = self.points.len();
        n >= 2 && self.points[n - 2] == p
    }
}
