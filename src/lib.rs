//! # SegKit
//!
//! A two-segment line editor: the selected segment is moved, rotated and
//! scaled from the keyboard, a double-click near the other segment switches
//! the selection, and both are drawn with Bresenham rasterization.
//!
//! ## Architecture
//!
//! SegKit is organized as a workspace with multiple crates:
//!
//! 1. **segkit-core** - Point and color types, error types
//! 2. **segkit-designer** - Segment transforms, selection, rasterizer, key bindings
//! 3. **segkit-settings** - TOML/JSON configuration
//! 4. **segkit-ui** - Display surface, framebuffer backend, render runtime
//! 5. **segkit** - Logging setup and the headless binary

pub mod session;

pub use segkit_core::{Error, Point, Result, Rgb};
pub use segkit_designer::{
    rasterize, rasterize_clipped, CanvasBounds, KeyBindings, LinePixels, ScaleDirection, Scene,
    SceneCommand, Segment, SegmentId, SegmentPair,
};
pub use segkit_settings::{Config, SettingsError};
pub use segkit_ui::{
    DisplaySurface, FramebufferSurface, RunSummary, Runtime, ScriptedInput, ShutdownHandle,
    StopReason,
};
pub use session::{feed_console, run_session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr
/// - RUST_LOG environment variable support (defaults to `info`)
/// - Thread names, so input worker and render loop lines can be told apart
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
