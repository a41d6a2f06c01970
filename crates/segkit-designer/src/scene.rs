//! The two-segment scene.
//!
//! `Scene` is the single owner of segment state. Commands from input
//! sources are applied here, on the thread that renders.

use segkit_core::Point;

use crate::commands::SceneCommand;
use crate::raster::{rasterize_segment, CanvasBounds};
use crate::segment::{Segment, DEFAULT_SCALE_FACTOR};
use crate::selection::{SegmentId, SegmentPair, DEFAULT_SELECT_THRESHOLD};

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pair: SegmentPair,
    scale_factor: f64,
    select_threshold: f64,
}

impl Default for Scene {
    /// Segment A at `(100,10)-(100,250)`, selected, and segment B at
    /// `(450,85)-(450,420)`.
    fn default() -> Self {
        Self::new(
            Segment::from_coords(100.0, 10.0, 100.0, 250.0),
            Segment::from_coords(450.0, 85.0, 450.0, 420.0),
        )
    }
}

impl Scene {
    /// Creates a scene with `a` selected and default tuning.
    pub fn new(a: Segment, b: Segment) -> Self {
        Self {
            pair: SegmentPair::new(a, b, SegmentId::A),
            scale_factor: DEFAULT_SCALE_FACTOR,
            select_threshold: DEFAULT_SELECT_THRESHOLD,
        }
    }

    pub fn with_scale_factor(mut self, factor: f64) -> Self {
        self.scale_factor = factor;
        self
    }

    pub fn with_select_threshold(mut self, threshold: f64) -> Self {
        self.select_threshold = threshold;
        self
    }

    pub fn with_selected(mut self, id: SegmentId) -> Self {
        if self.pair.selected_id() != id {
            self.pair.toggle();
        }
        self
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn select_threshold(&self) -> f64 {
        self.select_threshold
    }

    pub fn pair(&self) -> &SegmentPair {
        &self.pair
    }

    pub fn segment(&self, id: SegmentId) -> &Segment {
        self.pair.get(id)
    }

    pub fn selected_id(&self) -> SegmentId {
        self.pair.selected_id()
    }

    pub fn selected(&self) -> &Segment {
        self.pair.selected()
    }

    /// Applies `command` to the currently selected segment.
    pub fn apply(&mut self, command: &SceneCommand) {
        let id = self.pair.selected_id();
        let factor = self.scale_factor;
        let segment = self.pair.selected_mut();
        match *command {
            SceneCommand::Scale(direction) => segment.scale(direction, factor),
            SceneCommand::Rotate(theta) => segment.rotate(theta),
            SceneCommand::Translate { dx, dy } => segment.translate(dx, dy),
        }
        tracing::debug!("Applied {} to segment {}", command, id);
    }

    /// Runs the selection test for a double-click at `(x, y)`.
    ///
    /// Returns `true` if the other segment became selected.
    pub fn try_select(&mut self, x: i32, y: i32) -> bool {
        let changed = self
            .pair
            .try_select(Point::new(x as f64, y as f64), self.select_threshold);
        if changed {
            tracing::info!("Selected segment {}", self.pair.selected_id());
        }
        changed
    }

    /// Clipped pixels of segment `id`.
    pub fn stroke(
        &self,
        id: SegmentId,
        bounds: CanvasBounds,
    ) -> impl Iterator<Item = (i32, i32)> + Clone + '_ {
        rasterize_segment(self.pair.get(id), bounds)
    }
}
