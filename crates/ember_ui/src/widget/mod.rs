//! Widget system: the widget node, its type data and the tree that owns
//! them.

mod core;
mod document;
mod kind;
mod tree;

pub use self::core::{VisualState, Widget, WidgetFlags, WidgetId};
pub use document::{AnimationsDocument, WidgetDocument};
pub use kind::WidgetKind;
pub use tree::WidgetTree;
