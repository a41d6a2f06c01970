//! # SegKit Designer
//!
//! The geometry and rasterization kernel behind the SegKit editor.
//!
//! ## Core Components
//!
//! - **Segment**: a line with two endpoints and a stored center
//! - **Transforms**: translate, rotate and scale about the segment's own center
//! - **Selection**: the point-to-line distance test and the A/B selection toggle
//! - **Rasterizer**: Bresenham line walking with canvas clipping
//! - **Commands**: key-to-command dispatch for the selected segment
//! - **Scene**: the two-segment scene that owns selection and applies commands
//!
//! ## Architecture
//!
//! ```text
//! key press ──► KeyBindings ──► SceneCommand ──► Scene::apply ──► Segment
//! double-click ─────────────────────────────► Scene::try_select
//! Scene::segments ──► raster::rasterize_segment ──► pixels
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use segkit_designer::{CanvasBounds, KeyBindings, Scene};
//!
//! let mut scene = Scene::default();
//! let bindings = KeyBindings::default();
//!
//! if let Some(command) = bindings.map_key('d') {
//!     scene.apply(&command);
//! }
//!
//! let bounds = CanvasBounds::new(620, 480);
//! let pixels: Vec<_> = segkit_designer::rasterize_segment(scene.selected(), bounds).collect();
//! assert!(!pixels.is_empty());
//! ```

pub mod commands;
pub mod raster;
pub mod scene;
pub mod segment;
pub mod selection;

pub use commands::{
    KeyBindings, ScaleDirection, SceneCommand, DEFAULT_ROTATE_STEP, DEFAULT_TRANSLATE_STEP,
};
pub use raster::{rasterize, rasterize_clipped, rasterize_segment, CanvasBounds, LinePixels};
pub use scene::Scene;
pub use segment::{Segment, DEFAULT_SCALE_FACTOR};
pub use selection::{line_distance, SegmentId, SegmentPair, DEFAULT_SELECT_THRESHOLD};
