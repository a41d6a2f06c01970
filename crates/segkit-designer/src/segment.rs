//! Line segment model and its transform kernel.
//!
//! A [`Segment`] keeps its center as stored state next to the endpoints.
//! Every transform keeps the center equal to the endpoints' midpoint:
//! translation moves it with the endpoints, rotation and scaling pivot
//! around it and leave it untouched.

use segkit_core::Point;
use serde::{Deserialize, Serialize};

use crate::commands::ScaleDirection;

/// Fraction by which one scale step grows or shrinks the half-length.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Point,
    end: Point,
    center: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            center: start.midpoint(&end),
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The stored pivot used by rotation and scaling.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Midpoint recomputed from the current endpoints.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction of `start -> end` in radians.
    pub fn angle(&self) -> f64 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Moves both endpoints and the center by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let delta = Point::new(dx, dy);
        self.start = self.start + delta;
        self.end = self.end + delta;
        self.center = self.center + delta;
    }

    /// Rotates both endpoints by `theta` radians about the center.
    ///
    /// Positive angles turn counter-clockwise in math convention, which
    /// appears clockwise on a canvas whose Y axis points down.
    pub fn rotate(&mut self, theta: f64) {
        self.start = self.start.rotated_about(&self.center, theta);
        self.end = self.end.rotated_about(&self.center, theta);
    }

    /// Grows or shrinks the segment about its center by `factor`.
    ///
    /// The half vector to `start` is scaled by `1 + factor * direction` and
    /// `end` is then placed at its mirror image through the center, so the
    /// result is always point-symmetric regardless of the prior `end`.
    /// No clamping: `Shrink` with `factor >= 1.0` collapses or inverts the
    /// segment.
    pub fn scale(&mut self, direction: ScaleDirection, factor: f64) {
        let sign = direction.sign();
        let half = (self.start - self.center) * (1.0 - factor * -sign);
        self.start = self.center + half;
        self.end = self.center - half;
    }
}
