//! Selection between the two scene segments.
//!
//! Exactly one of the two segments is selected at any time. The selection
//! is a single [`SegmentId`] owned by [`SegmentPair`] rather than a flag on
//! each segment, so two segments can never both claim it.
//!
//! # Hit test
//!
//! A double-click only ever tests the *unselected* segment. The distance is
//! measured to the infinite line through that segment's endpoints, not to
//! the segment itself: a click far beyond an endpoint but on the line's
//! extension still selects it.

use segkit_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::segment::Segment;

/// Maximum click distance, in pixels, that switches the selection.
pub const DEFAULT_SELECT_THRESHOLD: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentId {
    #[default]
    A,
    B,
}

impl SegmentId {
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Perpendicular distance from `p` to the infinite line through `segment`.
///
/// Uses the implicit form `A·x + B·y + C = 0` with `A = -(y2 - y1)`,
/// `B = x2 - x1` and `C = -(A·x1 + B·y1)`. A zero-length segment has no
/// line; its distance is `f64::INFINITY` so it can never be selected.
pub fn line_distance(segment: &Segment, p: Point) -> f64 {
    let (s, e) = (segment.start(), segment.end());
    let a = -(e.y - s.y);
    let b = e.x - s.x;
    let norm = (a * a + b * b).sqrt();
    if norm == 0.0 {
        return f64::INFINITY;
    }
    let c = -(a * s.x + b * s.y);
    (a * p.x + b * p.y + c).abs() / norm
}

/// The two scene segments plus the id of the selected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPair {
    segments: [Segment; 2],
    selected: SegmentId,
}

impl SegmentPair {
    pub fn new(a: Segment, b: Segment, selected: SegmentId) -> Self {
        Self {
            segments: [a, b],
            selected,
        }
    }

    pub fn get(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    pub fn get_mut(&mut self, id: SegmentId) -> &mut Segment {
        &mut self.segments[id.index()]
    }

    pub fn selected_id(&self) -> SegmentId {
        self.selected
    }

    pub fn selected(&self) -> &Segment {
        self.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> &mut Segment {
        let id = self.selected;
        self.get_mut(id)
    }

    pub fn is_selected(&self, id: SegmentId) -> bool {
        self.selected == id
    }

    /// Makes the other segment the selected one.
    pub fn toggle(&mut self) {
        self.selected = self.selected.other();
    }

    /// Selection test for a double-click at `click`.
    ///
    /// Measures the distance from `click` to the unselected segment's line
    /// and flips the selection when it is strictly below `threshold`.
    /// Returns `true` if the selection changed.
    pub fn try_select(&mut self, click: Point, threshold: f64) -> bool {
        let candidate = self.selected.other();
        let dist = line_distance(self.get(candidate), click);
        if dist < threshold {
            self.selected = candidate;
            tracing::debug!(
                "Click ({:.1}, {:.1}) is {:.2}px from segment {}, selecting it",
                click.x,
                click.y,
                dist,
                candidate
            );
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        [SegmentId::A, SegmentId::B]
            .into_iter()
            .map(move |id| (id, self.get(id)))
    }
}
