//! Widget types and their type-specific data.

use serde::{Deserialize, Serialize};

/// What a widget is, with the fields only that type carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetKind {
    /// Groups children; never absorbs input. Layer roots are containers.
    #[default]
    Container,
    /// Clickable control; checkable when its widget is.
    Button,
    /// Horizontal value picker.
    Slider {
        /// Current value in `[0, 1]`.
        value: f32,
        /// Change per scroll notch or arrow key.
        step: f32,
    },
    /// Single-line text entry.
    TextField {
        /// Current contents.
        text: String,
        /// Maximum number of characters, `0` for unlimited.
        #[serde(default)]
        max_len: usize,
    },
}

impl WidgetKind {
    /// A slider at `value` with a 5% step.
    #[must_use]
    pub fn slider(value: f32) -> Self {
        Self::Slider {
            value: value.clamp(0.0, 1.0),
            step: 0.05,
        }
    }

    /// An empty, unlimited text field.
    #[must_use]
    pub const fn text_field() -> Self {
        Self::TextField {
            text: String::new(),
            max_len: 0,
        }
    }

    /// Returns true if widgets of this kind consume pointer input.
    #[must_use]
    pub const fn absorbs_input(&self) -> bool {
        !matches!(self, Self::Container)
    }
}
