use crate::{PathCommand, Slider};

// Traverses segments in drawing order and produces one command per stored
// point: MoveTo for the very first point, SmoothTo for the advance into a
// segment whose predecessor has through_last set, LineTo everywhere else.
pub fn emit_impl(s: &Slider) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(s.point_count());
    let mut smooth_joint = false;
    for seg in &s.segments {
        for (i, &p) in seg.points().iter().enumerate() {
            if out.is_empty() {
                out.push(PathCommand::MoveTo(p));
            } else if i == 0 && smooth_joint {
                out.push(PathCommand::SmoothTo(p));
            } else {
                out.push(PathCommand::LineTo(p));
            }
        }
        smooth_joint = seg.through_last();
    }
    out
}
