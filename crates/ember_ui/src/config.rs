//! # UI Configuration
//!
//! Loaded from TOML; every field has a default so an empty document is a
//! valid configuration.
//!
//! ```toml
//! [window]
//! width = 1920.0
//! height = 1080.0
//!
//! [events]
//! capacity = 256
//!
//! [animation]
//! default_duration = 0.15
//! default_easing = "linear"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, Transition, Tween};
use crate::error::{UiError, UiResult};
use crate::layout::Viewport;

/// Top-level configuration of a widget tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window size.
    pub window: Viewport,
    /// Notification queue settings.
    pub events: EventConfig,
    /// Defaults for transitions built through [`AnimationConfig::transition`].
    pub animation: AnimationConfig,
}

/// Notification queue settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Events queued between two dispatches before new ones are dropped.
    pub capacity: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

/// Transition defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds.
    pub default_duration: f32,
    /// Curve.
    pub default_easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            default_duration: 0.2,
            default_easing: Easing::ExponentialOut,
        }
    }
}

impl AnimationConfig {
    /// Builds a transition with the configured duration and easing.
    #[must_use]
    pub fn transition(&self, tween: Tween) -> Transition {
        Transition::new(tween, self.default_duration).with_easing(self.default_easing)
    }
}

impl UiConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Parse`] on malformed TOML or mistyped fields.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] if the file cannot be read and
    /// [`UiError::Parse`] if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| UiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded UI configuration");
        Ok(config)
    }

    /// Serializes the configuration to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> UiResult<String> {
        Ok(toml::to_string(self)?)
    }
}
