use std::collections::BTreeSet;
use std::mem;

/// The set of (segment, point) locations pinned as segment-boundary anchors.
///
/// Anchors are raw index pairs, so every structural mutation of the path must
/// run one of the re-index passes below; the passes are the only way indices
/// stored here ever change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorSet {
    set: BTreeSet<(usize, usize)>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, seg: usize, pt: usize) -> bool {
        self.set.contains(&(seg, pt))
    }

    pub fn insert(&mut self, seg: usize, pt: usize) {
        self.set.insert((seg, pt));
    }

    pub fn remove(&mut self, seg: usize, pt: usize) -> bool {
        self.set.remove(&(seg, pt))
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.set.iter().copied()
    }

    pub fn clear(&mut self) {
        self.set.clear();
    }

    /// Point `pt` of segment `seg` was deleted: drop its anchor, shift later
    /// anchors in the same segment down by one.
    pub(crate) fn remove_point(&mut self, seg: usize, pt: usize) {
        let old = mem::take(&mut self.set);
        self.set = old
            .into_iter()
            .filter(|&(s, q)| !(s == seg && q == pt))
            .map(|(s, q)| if s == seg && q > pt { (s, q - 1) } else { (s, q) })
            .collect();
    }

    /// A point was inserted at index `at` of segment `seg`: shift anchors at
    /// or after the insertion index up by one.
    pub(crate) fn insert_gap(&mut self, seg: usize, at: usize) {
        let old = mem::take(&mut self.set);
        self.set = old
            .into_iter()
            .map(|(s, q)| if s == seg && q >= at { (s, q + 1) } else { (s, q) })
            .collect();
    }

    /// Segment `seg` was removed: drop its anchors, shift higher segment
    /// indices down by one.
    pub(crate) fn remove_segment(&mut self, seg: usize) {
        let old = mem::take(&mut self.set);
        self.set = old
            .into_iter()
            .filter(|&(s, _)| s != seg)
            .map(|(s, q)| if s > seg { (s - 1, q) } else { (s, q) })
            .collect();
    }
}
