pub mod anchors;
pub mod error;
pub mod model;
pub mod geometry {
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod emit;
    pub mod picking;
}

use anchors::AnchorSet;
use error::SliderError;
use model::{Point, Segment};
use serde::{Deserialize, Serialize};

/// One drawing command of the renderable path description.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    #[serde(rename = "move_to")]
    MoveTo(Point),
    #[serde(rename = "line_to")]
    LineTo(Point),
    #[serde(rename = "smooth_to")]
    SmoothTo(Point),
}

/// Outcome of a pointer-release while drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The release landed exactly on the second-to-last point: that point was
    /// pinned as an anchor and nothing was appended.
    Anchored { seg: usize, pt: usize },
    /// The release point was appended to the path.
    Pushed,
}

/// The editable multi-segment path: an ordered sequence of segments plus the
/// set of pinned anchor locations. Owns all point data exclusively; queries
/// hand out copies or index pairs, so the engine may restructure segments
/// freely between calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slider {
    pub(crate) segments: Vec<Segment>,
    pub(crate) anchors: AnchorSet,
}

impl Slider {
    pub fn new() -> Self {
        Slider {
            segments: Vec::new(),
            anchors: AnchorSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total number of stored points across all segments.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.len()).sum()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, seg: usize) -> Option<&Segment> {
        self.segments.get(seg)
    }

    pub fn point(&self, seg: usize, pt: usize) -> Result<Point, SliderError> {
        self.check_point(seg, pt)?;
        Ok(self.segments[seg].points[pt])
    }

    pub fn anchors(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.anchors.iter()
    }

    // Drawing-mode operations

    /// Appends `p` to the last segment, creating the first segment when the
    /// path is empty. When the last point of the last segment is pinned as an
    /// anchor, that segment is closed and a new segment begins at `p`.
    pub fn push_point(&mut self, p: Point) {
        if self.segments.is_empty() {
            self.segments.push(Segment::new(p));
            return;
        }
        let s = self.segments.len() - 1;
        let last = self.segments[s].len() - 1;
        if self.anchors.contains(s, last) {
            self.segments.push(Segment::new(p));
        } else {
            self.segments[s].points.push(p);
        }
    }

    /// Removes the last point of the last segment, dropping the segment if
    /// that empties it. Exact inverse of `push_point`. `None` on an empty
    /// path.
    pub fn pop_point(&mut self) -> Option<Point> {
        let s = self.segments.len().checked_sub(1)?;
        let pt = self.segments[s].len() - 1;
        let p = self.segments[s].points.pop()?;
        self.anchors.remove_point(s, pt);
        if self.segments[s].points.is_empty() {
            self.segments.pop();
            self.anchors.remove_segment(s);
        }
        Some(p)
    }

    pub fn last_point(&self) -> Result<(usize, usize), SliderError> {
        let s = self
            .segments
            .len()
            .checked_sub(1)
            .ok_or(SliderError::EmptyPath)?;
        Ok((s, self.segments[s].len() - 1))
    }

    pub fn last_segment(&self) -> Result<&Segment, SliderError> {
        self.segments.last().ok_or(SliderError::EmptyPath)
    }

    /// Sets the through flag on the last segment. Idempotent; held modifier
    /// keys toggle this repeatedly while drawing.
    pub fn set_last_segment_through(&mut self, through: bool) -> Result<(), SliderError> {
        let seg = self.segments.last_mut().ok_or(SliderError::EmptyPath)?;
        seg.through_last = through;
        Ok(())
    }

    /// Pointer-release while drawing. If the last segment has more than one
    /// point and `p` coincides with its second-to-last point, that point is
    /// pinned as an anchor instead of appending a duplicate; otherwise `p` is
    /// pushed. Prevents degenerate zero-length trailing geometry when the
    /// user double-backs on the last placed point.
    pub fn release_point(&mut self, p: Point) -> Release {
        if let Some(s) = self.segments.len().checked_sub(1) {
            let seg = &self.segments[s];
            if seg.len() > 1 && seg.is_second_last(p) {
                let pt = seg.len() - 2;
                self.anchors.insert(s, pt);
                return Release::Anchored { seg: s, pt };
            }
        }
        self.push_point(p);
        Release::Pushed
    }

    /// Replaces the coordinate at (`seg`, `pt`) with `p`. Anchored boundary
    /// points are stored once and shared by cross-reference, so a single
    /// write moves the boundary for both adjoining segments.
    pub fn move_point(&mut self, seg: usize, pt: usize, p: Point) -> Result<(), SliderError> {
        self.check_point(seg, pt)?;
        self.segments[seg].points[pt] = p;
        Ok(())
    }

    // Edit-mode operations

    pub fn is_anchor(&self, seg: usize, pt: usize) -> Result<bool, SliderError> {
        self.check_point(seg, pt)?;
        Ok(self.anchors.contains(seg, pt))
    }

    /// Pins (`seg`, `pt`) as an anchor. Idempotent.
    pub fn set_anchor(&mut self, seg: usize, pt: usize) -> Result<(), SliderError> {
        self.check_point(seg, pt)?;
        self.anchors.insert(seg, pt);
        Ok(())
    }

    /// Unpins (`seg`, `pt`). No-op if it was not an anchor.
    pub fn reset_anchor(&mut self, seg: usize, pt: usize) -> Result<(), SliderError> {
        self.check_point(seg, pt)?;
        self.anchors.remove(seg, pt);
        Ok(())
    }

    /// Removes the point at (`seg`, `pt`) and returns it. Any anchor on the
    /// point is dropped and later anchors are re-indexed; an emptied segment
    /// is removed, shifting higher segment indices down. When this leaves the
    /// whole path empty, `is_empty()` signals the caller to re-enter drawing
    /// mode.
    pub fn delete_point(&mut self, seg: usize, pt: usize) -> Result<Point, SliderError> {
        self.check_point(seg, pt)?;
        let p = self.segments[seg].points.remove(pt);
        self.anchors.remove_point(seg, pt);
        if self.segments[seg].points.is_empty() {
            self.segments.remove(seg);
            self.anchors.remove_segment(seg);
        }
        Ok(p)
    }

    /// Inserts `p` between the two points forming edge `edge` of segment
    /// `seg` (edge i connects point i and point i+1). Anchors at or after the
    /// insertion index shift up by one.
    pub fn insert_point(&mut self, p: Point, seg: usize, edge: usize) -> Result<(), SliderError> {
        self.check_edge(seg, edge)?;
        self.segments[seg].points.insert(edge + 1, p);
        self.anchors.insert_gap(seg, edge + 1);
        Ok(())
    }

    /// Full reset back to the freshly-constructed state.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.anchors.clear();
    }

    // Hit-testing

    /// First point within the pick tolerance of `p`, scanning segment 0..N-1
    /// and point 0..M-1 in order. First match wins, not nearest. `None` when
    /// nothing qualifies; absence is a normal result, not an error.
    pub fn near_point(&self, p: Point) -> Option<(usize, usize)> {
        algorithms::picking::near_point_impl(self, p)
    }

    /// First within-segment edge within the pick tolerance of `p`, in the
    /// same scan order as `near_point`.
    pub fn near_edge(&self, p: Point) -> Option<(usize, usize)> {
        algorithms::picking::near_edge_impl(self, p)
    }

    // PathEmitter

    /// Renderable path description: one command per stored point. Pure read
    /// of engine state; safe to call after every mutation.
    pub fn emit(&self) -> Vec<PathCommand> {
        algorithms::emit::emit_impl(self)
    }

    /// The command list as a JSON value for a renderer across a language
    /// boundary.
    pub fn emit_json(&self) -> serde_json::Value {
        serde_json::to_value(self.emit()).unwrap_or(serde_json::Value::Null)
    }

    fn check_point(&self, seg: usize, pt: usize) -> Result<(), SliderError> {
        let len = self.segments.len();
        if seg >= len {
            return Err(SliderError::SegmentOutOfRange { seg, len });
        }
        let n = self.segments[seg].len();
        if pt >= n {
            return Err(SliderError::PointOutOfRange { seg, pt, len: n });
        }
        Ok(())
    }

    fn check_edge(&self, seg: usize, edge: usize) -> Result<(), SliderError> {
        let len = self.segments.len();
        if seg >= len {
            return Err(SliderError::SegmentOutOfRange { seg, len });
        }
        let edges = self.segments[seg].len() - 1;
        if edge >= edges {
            return Err(SliderError::EdgeOutOfRange { seg, edge, len: edges });
        }
        Ok(())
    }
}
