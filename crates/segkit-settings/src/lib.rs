//! Configuration and settings management for SegKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is the
//! platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas (size, background)
//! - Segments (initial endpoints, stroke colors, initial selection)
//! - Controls (translate/rotate steps, scale factor)
//! - Selection (click threshold)
//! - Timing (poll and frame intervals, optional frame limit)

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, Config, ControlSettings, SegmentSettings, SegmentSpec, SelectionSettings,
    TimingSettings,
};
pub use error::{Result, SettingsError};
