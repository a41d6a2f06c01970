//! Scene commands and the keyboard dispatch table.
//!
//! Input sources never touch segments directly. A key press is mapped to a
//! [`SceneCommand`] which the scene owner applies to whichever segment is
//! selected at the time the command is processed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixels moved per translate key press.
pub const DEFAULT_TRANSLATE_STEP: f64 = 10.0;
/// Radians turned per rotate key press.
pub const DEFAULT_ROTATE_STEP: f64 = 0.256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleDirection {
    Grow,
    Shrink,
}

impl ScaleDirection {
    /// `+1.0` for grow, `-1.0` for shrink.
    pub fn sign(self) -> f64 {
        match self {
            Self::Grow => 1.0,
            Self::Shrink => -1.0,
        }
    }
}

/// A transform to apply to the selected segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneCommand {
    /// Scale about the center using the scene's configured factor.
    Scale(ScaleDirection),
    /// Rotate about the center by the given angle in radians.
    Rotate(f64),
    /// Move by the given offset in pixels.
    Translate { dx: f64, dy: f64 },
}

impl fmt::Display for SceneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(ScaleDirection::Grow) => write!(f, "scale up"),
            Self::Scale(ScaleDirection::Shrink) => write!(f, "scale down"),
            Self::Rotate(theta) => write!(f, "rotate {:+.3} rad", theta),
            Self::Translate { dx, dy } => write!(f, "move ({:+}, {:+})", dx, dy),
        }
    }
}

/// Maps key characters to scene commands.
///
/// | key | command |
/// |-----|---------|
/// | `+` / `-` | scale up / down |
/// | `1` / `2` | rotate by `+step` / `-step` |
/// | `a` / `d` | move left / right |
/// | `w` / `s` | move up / down (canvas Y points down) |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBindings {
    pub translate_step: f64,
    pub rotate_step: f64,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            translate_step: DEFAULT_TRANSLATE_STEP,
            rotate_step: DEFAULT_ROTATE_STEP,
        }
    }
}

impl KeyBindings {
    pub fn new(translate_step: f64, rotate_step: f64) -> Self {
        Self {
            translate_step,
            rotate_step,
        }
    }

    /// Returns the command bound to `key`, or `None` for unbound keys.
    pub fn map_key(&self, key: char) -> Option<SceneCommand> {
        let step = self.translate_step;
        let command = match key {
            '+' => SceneCommand::Scale(ScaleDirection::Grow),
            '-' => SceneCommand::Scale(ScaleDirection::Shrink),
            '1' => SceneCommand::Rotate(self.rotate_step),
            '2' => SceneCommand::Rotate(-self.rotate_step),
            'a' => SceneCommand::Translate { dx: -step, dy: 0.0 },
            'd' => SceneCommand::Translate { dx: step, dy: 0.0 },
            'w' => SceneCommand::Translate { dx: 0.0, dy: -step },
            's' => SceneCommand::Translate { dx: 0.0, dy: step },
            _ => {
                tracing::trace!("Ignoring unbound key {:?}", key);
                return None;
            }
        };
        Some(command)
    }

    /// Every bound key, in table order.
    pub fn bound_keys(&self) -> [char; 8] {
        ['+', '-', '1', '2', 'a', 'd', 'w', 's']
    }
}
