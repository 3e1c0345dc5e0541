use std::fmt;

/// Precondition and bounds failures. Index-taking operations fail fast with
/// the offending index and the valid bound; hit-testing queries never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderError {
    /// The path holds no segments; callers branch on `is_empty()` first.
    EmptyPath,
    SegmentOutOfRange { seg: usize, len: usize },
    PointOutOfRange { seg: usize, pt: usize, len: usize },
    EdgeOutOfRange { seg: usize, edge: usize, len: usize },
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SliderError::EmptyPath => write!(f, "path is empty"),
            SliderError::SegmentOutOfRange { seg, len } => {
                write!(f, "segment index {} out of range (have {})", seg, len)
            }
            SliderError::PointOutOfRange { seg, pt, len } => {
                write!(
                    f,
                    "point index {} out of range in segment {} (have {})",
                    pt, seg, len
                )
            }
            SliderError::EdgeOutOfRange { seg, edge, len } => {
                write!(
                    f,
                    "edge index {} out of range in segment {} (have {})",
                    edge, seg, len
                )
            }
        }
    }
}

impl std::error::Error for SliderError {}
