//! The display surface contract.

use segkit_core::{Result, Rgb};
use segkit_designer::{rasterize_clipped, CanvasBounds};

/// A fixed-size pixel canvas with polled input.
///
/// Input polling must never block; both poll methods return `None` when
/// nothing is pending.
pub trait DisplaySurface {
    /// Canvas size. Fixed for the lifetime of the surface.
    fn bounds(&self) -> CanvasBounds;

    /// Writes one pixel of the back buffer. Out-of-range coordinates are
    /// ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Draws a line with the Bresenham rasterizer, clipped to the canvas.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        let bounds = self.bounds();
        for (x, y) in rasterize_clipped(x1, y1, x2, y2, bounds) {
            self.set_pixel(x, y, color);
        }
    }

    /// Next pending key press, if any.
    fn poll_keyboard(&mut self) -> Option<char>;

    /// Position of the next pending double-click, if any.
    fn poll_double_click(&mut self) -> Option<(i32, i32)>;

    /// Shows the back buffer and starts a fresh, cleared one.
    fn present(&mut self) -> Result<()>;
}
