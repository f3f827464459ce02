//! Registration options and engine configuration.
//!
//! `InteractOptions` is the typed replacement for a loose options object:
//! absent or unrecognized keys fall back to `false` and never fail.
//! `EngineConfig` carries the resize margins and is validated before an
//! engine is built.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, MOUSE_RESIZE_MARGIN, TOUCH_RESIZE_MARGIN,
};
use crate::error::{InteractError, InteractResult};
use crate::types::PointerKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Registration Options
// ============================================================================

/// Capabilities requested when registering an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractOptions {
    pub drag: bool,
    pub resize: bool,
}

impl InteractOptions {
    pub const NONE: Self = Self {
        drag: false,
        resize: false,
    };

    pub fn draggable() -> Self {
        Self {
            drag: true,
            ..Self::NONE
        }
    }

    pub fn resizable() -> Self {
        Self {
            resize: true,
            ..Self::NONE
        }
    }

    pub fn both() -> Self {
        Self {
            drag: true,
            resize: true,
        }
    }

    /// Build options from an untyped value.
    ///
    /// Anything that is not an object yields the defaults. Keys other than
    /// `drag` and `resize` are ignored, and non-boolean values count as
    /// `false`.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                tracing::warn!(?value, "Options are not an object, using defaults");
            }
            return Self::NONE;
        };

        let flag = |key: &str| match map.get(key) {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                tracing::warn!(key, value = ?other, "Non-boolean option, treating as false");
                false
            }
        };

        Self {
            drag: flag("drag"),
            resize: flag("resize"),
        }
    }

    /// Whether the element can take part in any gesture.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.drag || self.resize
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Tunables for an [`InteractEngine`](crate::InteractEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Resize grab zone for mouse input
    pub mouse_margin: f64,
    /// Resize grab zone for touch input
    pub touch_margin: f64,
    /// Emit a debug log line every time a snapshot is taken
    pub log_snapshots: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mouse_margin: MOUSE_RESIZE_MARGIN,
            touch_margin: TOUCH_RESIZE_MARGIN,
            log_snapshots: false,
        }
    }
}

impl EngineConfig {
    /// Margin used for hit classification of an event of the given kind.
    #[inline]
    pub fn margin_for(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.mouse_margin,
            PointerKind::Touch => self.touch_margin,
        }
    }

    pub fn validate(&self) -> InteractResult<()> {
        for (name, value) in [("mouse", self.mouse_margin), ("touch", self.touch_margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(InteractError::InvalidMargin { name, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> InteractResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load_from(path: impl AsRef<Path>) -> InteractResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load from the per-user default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Persist the configuration as pretty JSON.
    pub fn save_to(&self, path: impl AsRef<Path>) -> InteractResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// `<config dir>/interact/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
