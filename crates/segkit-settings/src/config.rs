//! Configuration file model, loading, saving and validation.

use segkit_core::{Point, Rgb};
use segkit_designer::{
    KeyBindings, Scene, Segment, SegmentId, DEFAULT_ROTATE_STEP, DEFAULT_SCALE_FACTOR,
    DEFAULT_SELECT_THRESHOLD, DEFAULT_TRANSLATE_STEP,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SettingsError};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "SEGKIT_CONFIG";

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Color the back buffer is cleared to after each frame
    pub background: Rgb,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 620,
            height: 480,
            background: Rgb::BLACK,
        }
    }
}

/// Initial placement and stroke color of one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub color: Rgb,
    pub start: Point,
    pub end: Point,
}

impl SegmentSpec {
    pub fn to_segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// Segment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentSettings {
    /// Which segment starts out selected
    pub selected: SegmentId,
    pub a: SegmentSpec,
    pub b: SegmentSpec,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        Self {
            selected: SegmentId::A,
            a: SegmentSpec {
                color: Rgb::YELLOW,
                start: Point::new(100.0, 10.0),
                end: Point::new(100.0, 250.0),
            },
            b: SegmentSpec {
                color: Rgb::GREEN,
                start: Point::new(450.0, 85.0),
                end: Point::new(450.0, 420.0),
            },
        }
    }
}

impl SegmentSettings {
    pub fn spec(&self, id: SegmentId) -> &SegmentSpec {
        match id {
            SegmentId::A => &self.a,
            SegmentId::B => &self.b,
        }
    }
}

/// Keyboard control settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Pixels moved per translate key press
    pub translate_step: f64,
    /// Radians turned per rotate key press
    pub rotate_step: f64,
    /// Fractional half-length change per scale key press
    pub scale_factor: f64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            translate_step: DEFAULT_TRANSLATE_STEP,
            rotate_step: DEFAULT_ROTATE_STEP,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

/// Selection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// A double-click closer than this many pixels to the other segment's
    /// line selects it
    pub threshold: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SELECT_THRESHOLD,
        }
    }
}

/// Loop timing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Delay between keyboard polls when no key is pending
    pub input_poll_ms: u64,
    /// Delay between rendered frames
    pub frame_interval_ms: u64,
    /// Stop after this many frames; run until shut down when unset
    pub max_frames: Option<u64>,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            input_poll_ms: 1,
            frame_interval_ms: 1,
            max_frames: None,
        }
    }
}

impl TimingSettings {
    pub fn input_poll_interval(&self) -> Duration {
        Duration::from_millis(self.input_poll_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Where the last frame is written as PNG on exit
    pub snapshot_path: Option<PathBuf>,
    pub canvas: CanvasSettings,
    pub segments: SegmentSettings,
    pub controls: ControlSettings,
    pub selection: SelectionSettings,
    pub timing: TimingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location.
    ///
    /// `$SEGKIT_CONFIG` when set, otherwise `<config dir>/segkit/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("segkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("No platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using built-in defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid("canvas", "Canvas dimensions must be > 0"));
        }

        for id in [SegmentId::A, SegmentId::B] {
            let spec = self.segments.spec(id);
            let coords = [spec.start.x, spec.start.y, spec.end.x, spec.end.y];
            if coords.iter().any(|c| !c.is_finite()) {
                return Err(SettingsError::invalid(
                    format!("segments.{}", id.to_string().to_lowercase()),
                    "Endpoints must be finite numbers",
                ));
            }
        }

        let controls = &self.controls;
        if !(controls.translate_step.is_finite() && controls.translate_step > 0.0) {
            return Err(SettingsError::invalid(
                "controls.translate_step",
                "Translate step must be > 0",
            ));
        }
        if !(controls.rotate_step.is_finite() && controls.rotate_step > 0.0) {
            return Err(SettingsError::invalid(
                "controls.rotate_step",
                "Rotate step must be > 0",
            ));
        }
        if !(controls.scale_factor > 0.0 && controls.scale_factor < 1.0) {
            return Err(SettingsError::invalid(
                "controls.scale_factor",
                "Scale factor must be between 0 and 1 (exclusive)",
            ));
        }

        if !(self.selection.threshold.is_finite() && self.selection.threshold > 0.0) {
            return Err(SettingsError::invalid(
                "selection.threshold",
                "Selection threshold must be > 0",
            ));
        }

        if self.timing.input_poll_ms == 0 || self.timing.frame_interval_ms == 0 {
            return Err(SettingsError::invalid(
                "timing",
                "Poll and frame intervals must be > 0",
            ));
        }

        Ok(())
    }

    /// Builds the initial scene described by this config.
    pub fn build_scene(&self) -> Scene {
        Scene::new(self.segments.a.to_segment(), self.segments.b.to_segment())
            .with_selected(self.segments.selected)
            .with_scale_factor(self.controls.scale_factor)
            .with_select_threshold(self.selection.threshold)
    }

    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings::new(self.controls.translate_step, self.controls.rotate_step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}
