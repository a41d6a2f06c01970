//! In-memory double-buffered surface.
//!
//! Drawing goes to a back buffer; [`DisplaySurface::present`] swaps it to
//! the front and clears the new back buffer to the background color. The
//! front buffer always holds the last complete frame.

use image::{ImageFormat, Rgb as Pixel, RgbImage};
use segkit_core::{Error, Result, Rgb};
use segkit_designer::CanvasBounds;
use std::path::Path;

use crate::input::ScriptedInput;
use crate::surface::DisplaySurface;

pub struct FramebufferSurface {
    back: RgbImage,
    front: RgbImage,
    background: Rgb,
    input: ScriptedInput,
    frames_presented: u64,
}

impl FramebufferSurface {
    pub fn new(width: u32, height: u32, background: Rgb, input: ScriptedInput) -> Self {
        let fill = Pixel(background.to_array());
        Self {
            back: RgbImage::from_pixel(width, height, fill),
            front: RgbImage::from_pixel(width, height, fill),
            background,
            input,
            frames_presented: 0,
        }
    }

    /// The input queue this surface polls.
    pub fn input(&self) -> &ScriptedInput {
        &self.input
    }

    /// The last presented frame.
    pub fn frame(&self) -> &RgbImage {
        &self.front
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Color of a pixel in the last presented frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        let Pixel(c) = *self.front.get_pixel_checked(x, y)?;
        Some(Rgb::from(c))
    }

    /// Number of pixels of `color` in the last presented frame.
    pub fn count_color(&self, color: Rgb) -> usize {
        let target = Pixel(color.to_array());
        self.front.pixels().filter(|p| **p == target).count()
    }

    /// Writes the last presented frame as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.front.save_with_format(path, ImageFormat::Png)?;
        tracing::info!("Saved frame snapshot to {}", path.display());
        Ok(())
    }
}

impl DisplaySurface for FramebufferSurface {
    fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.back.width(), self.back.height())
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(p) = self.back.get_pixel_mut_checked(x, y) {
            *p = Pixel(color.to_array());
        }
    }

    fn poll_keyboard(&mut self) -> Option<char> {
        self.input.pop_key()
    }

    fn poll_double_click(&mut self) -> Option<(i32, i32)> {
        self.input.pop_double_click()
    }

    fn present(&mut self) -> Result<()> {
        if self.back.dimensions() != self.front.dimensions() {
            return Err(Error::surface("Front and back buffer sizes differ"));
        }
        std::mem::swap(&mut self.back, &mut self.front);
        let fill = Pixel(self.background.to_array());
        for p in self.back.pixels_mut() {
            *p = fill;
        }
        self.frames_presented += 1;
        Ok(())
    }
}
