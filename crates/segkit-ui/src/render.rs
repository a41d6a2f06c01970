//! Drawing the scene onto a surface.

use segkit_core::{Result, Rgb};
use segkit_designer::{Scene, SegmentId};
use segkit_settings::SegmentSettings;

use crate::surface::DisplaySurface;

/// Stroke color per segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentColors {
    pub a: Rgb,
    pub b: Rgb,
}

impl Default for SegmentColors {
    fn default() -> Self {
        Self {
            a: Rgb::YELLOW,
            b: Rgb::GREEN,
        }
    }
}

impl SegmentColors {
    pub fn get(&self, id: SegmentId) -> Rgb {
        match id {
            SegmentId::A => self.a,
            SegmentId::B => self.b,
        }
    }
}

impl From<&SegmentSettings> for SegmentColors {
    fn from(settings: &SegmentSettings) -> Self {
        Self {
            a: settings.spec(SegmentId::A).color,
            b: settings.spec(SegmentId::B).color,
        }
    }
}

/// Rasterizes both segments into the surface and presents the frame.
///
/// Segment B is drawn last, so it wins where the two strokes overlap.
pub fn render_scene<S>(scene: &Scene, colors: &SegmentColors, surface: &mut S) -> Result<()>
where
    S: DisplaySurface + ?Sized,
{
    let bounds = surface.bounds();
    for (id, _) in scene.pair().iter() {
        let color = colors.get(id);
        for (x, y) in scene.stroke(id, bounds) {
            surface.set_pixel(x, y, color);
        }
    }
    surface.present()
}
