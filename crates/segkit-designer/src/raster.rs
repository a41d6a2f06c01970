//! Bresenham line rasterization.
//!
//! [`LinePixels`] walks the integer pixels of a line using only integer
//! arithmetic. The walk always advances one pixel per step along the axis
//! with the larger extent, so the output is an 8-connected path with no
//! gaps and exactly `max(|dx|, |dy|) + 1` pixels.
//!
//! Walk, in working coordinates:
//!
//! ```text
//! steep?   swap x/y of both endpoints
//! x1 > x2? swap the endpoints
//! err = -dx, then per column: emit, err += 2dy, if err > 0 { y += step; err -= 2dx }
//! ```
//!
//! Clipping first restricts the long axis to the canvas, jumping straight to
//! the first visible column, so the cost of a clipped walk is bounded by the
//! canvas size however long the line is. Pixels still outside the canvas on
//! the short axis are then dropped. The surviving pixels are exactly the ones
//! the unclipped walk would emit inside the canvas.

use crate::segment::Segment;

/// Pixel extent of a canvas. Drawable pixels lie strictly inside it:
/// `0 < x < width` and `0 < y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasBounds {
    pub width: u32,
    pub height: u32,
}

impl CanvasBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > 0 && y > 0 && (x as i64) < self.width as i64 && (y as i64) < self.height as i64
    }

    /// Inclusive range of drawable coordinates along one axis.
    fn axis_range(extent: u32) -> (i64, i64) {
        (1, extent as i64 - 1)
    }
}

/// Iterator over the pixels of a line from `(x1, y1)` to `(x2, y2)`.
///
/// The iterator is `Clone`, so a walk can be restarted from any point.
/// Pixels come out in increasing order along the long axis, which means a
/// reversed line yields the same pixels in the same order.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i64,
    y: i64,
    y_step: i64,
    err: i64,
    dx2: i64,
    dy2: i64,
    steep: bool,
    remaining: usize,
}

impl LinePixels {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (mut x1, mut y1, mut x2, mut y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);

        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        let dx = x2 - x1;
        let dy = (y2 - y1).abs();
        let y_step = if dy == 0 {
            0
        } else if y1 < y2 {
            1
        } else {
            -1
        };

        Self {
            x: x1,
            y: y1,
            y_step,
            err: -dx,
            dx2: dx * 2,
            dy2: dy * 2,
            steep,
            remaining: (dx + 1) as usize,
        }
    }

    /// Whether the walk runs along the Y axis.
    pub fn is_steep(&self) -> bool {
        self.steep
    }

    /// Restricts the remaining walk to the long-axis span of `bounds`.
    ///
    /// Columns before the canvas are skipped in constant time. The error
    /// term stays in `(-2dx, 0]` after every step, which fixes how many
    /// short-axis steps `k` columns take. The walk ends at the last column
    /// inside the canvas.
    pub fn clipped(mut self, bounds: CanvasBounds) -> Self {
        let (lo, hi) = if self.steep {
            CanvasBounds::axis_range(bounds.height)
        } else {
            CanvasBounds::axis_range(bounds.width)
        };
        if self.remaining == 0 {
            return self;
        }
        let last = self.x + self.remaining as i64 - 1;
        let first = self.x.max(lo);
        let end = last.min(hi);
        if first > end {
            self.remaining = 0;
            return self;
        }

        let skip = first - self.x;
        if skip > 0 {
            let dx2 = self.dx2 as i128;
            let total = self.err as i128 + skip as i128 * self.dy2 as i128;
            let y_moves = (total + dx2 - 1).div_euclid(dx2);
            self.y += y_moves as i64 * self.y_step;
            self.err = (total - y_moves * dx2) as i64;
            self.x = first;
        }
        self.remaining = (end - first + 1) as usize;
        self
    }
}

impl Iterator for LinePixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pixel = if self.steep {
            (self.y as i32, self.x as i32)
        } else {
            (self.x as i32, self.y as i32)
        };

        self.err += self.dy2;
        if self.err > 0 {
            self.y += self.y_step;
            self.err -= self.dx2;
        }
        self.x += 1;
        self.remaining -= 1;

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

impl std::iter::FusedIterator for LinePixels {}

/// Unclipped pixels of the line from `(x1, y1)` to `(x2, y2)`.
pub fn rasterize(x1: i32, y1: i32, x2: i32, y2: i32) -> LinePixels {
    LinePixels::new(x1, y1, x2, y2)
}

/// Pixels of the line that fall inside `bounds`. Out-of-range pixels are
/// silently skipped; row 0 and column 0 are never drawn.
pub fn rasterize_clipped(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    bounds: CanvasBounds,
) -> impl Iterator<Item = (i32, i32)> + Clone {
    LinePixels::new(x1, y1, x2, y2)
        .clipped(bounds)
        .filter(move |&(x, y)| bounds.contains(x, y))
}

/// Clipped pixels of a segment. Endpoint coordinates are truncated toward
/// zero before walking.
pub fn rasterize_segment(
    segment: &Segment,
    bounds: CanvasBounds,
) -> impl Iterator<Item = (i32, i32)> + Clone {
    let (s, e) = (segment.start(), segment.end());
    rasterize_clipped(s.x as i32, s.y as i32, e.x as i32, e.y as i32, bounds)
}
