//! # UI Error Types
//!
//! Layout, animation and input routing never fail. Errors only come from
//! structural edits of the widget tree and from loading documents and
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::animation::TransitionTarget;
use crate::widget::WidgetId;

/// Errors that can occur in the UI system.
#[derive(Error, Debug)]
pub enum UiError {
    /// The handle does not refer to a live widget.
    #[error("widget {0} does not exist")]
    StaleWidget(WidgetId),

    /// The child already has a parent.
    #[error("widget {child} is already attached to {parent}")]
    AlreadyAttached {
        /// The widget being attached.
        child: WidgetId,
        /// Its current parent.
        parent: WidgetId,
    },

    /// Attaching would make a widget its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle {
        /// The requested parent.
        parent: WidgetId,
        /// The widget being attached.
        child: WidgetId,
    },

    /// Layer roots cannot be attached under another widget.
    #[error("widget {0} is a layer root")]
    LayerRoot(WidgetId),

    /// Two transitions in one group would write the same attribute.
    #[error("transition group already animates {0:?}")]
    DuplicateTarget(TransitionTarget),

    /// A document or configuration could not be parsed.
    #[error("invalid document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A document could not be written.
    #[error("could not serialize document: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A file could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
