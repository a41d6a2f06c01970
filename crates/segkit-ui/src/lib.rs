//! # SegKit UI
//!
//! Everything between the geometry kernel and a screen:
//!
//! - [`DisplaySurface`]: the polling display contract (pixels, keyboard,
//!   double-clicks, frame presentation)
//! - [`FramebufferSurface`]: an in-memory surface backed by `image` buffers
//! - [`ScriptedInput`]: a shared input queue feeding the framebuffer
//! - [`Runtime`]: the input worker thread and the render loop that owns the
//!   scene
//!
//! Key presses are read on a worker thread and forwarded as scene commands
//! over a channel. The render loop is the only code that touches the scene:
//! each tick it applies every pending command, runs the selection test for
//! one double-click, draws and presents.

pub mod framebuffer;
pub mod input;
pub mod render;
pub mod runtime;
pub mod surface;

pub use framebuffer::FramebufferSurface;
pub use input::{ConsoleLine, ScriptedInput};
pub use render::{render_scene, SegmentColors};
pub use runtime::{RunSummary, Runtime, RuntimeOptions, ShutdownHandle, StopReason};
pub use surface::DisplaySurface;
