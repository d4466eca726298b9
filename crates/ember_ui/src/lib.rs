//! # Ember UI
//!
//! Retained-mode widget toolkit core: constraint layout, transition
//! animation and input routing for a tree of widgets.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        UI PIPELINE                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  resize ─→ on_parent_change ─→ constraints ─→ original box  │
//! │  update ─→ animator ─→ transitions ─→ current box / alpha   │
//! │  input  ─→ reverse-order routing ─→ first absorber wins     │
//! │  render ─→ visible widgets ─→ transform-nested commands     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each frame: feed input, call [`WidgetTree::update`], then
//! [`WidgetTree::render`], then drain notifications with
//! [`Dispatcher::dispatch`].
//!
//! ```
//! use ember_ui::{Constraint, ConstraintSet, Rect, Widget, WidgetKind, WidgetTree};
//!
//! let mut tree = WidgetTree::default();
//! let hud = tree.add_layer("hud");
//! let panel = tree.insert(
//!     Widget::new("panel", WidgetKind::Container).with_constraints(
//!         ConstraintSet::new()
//!             .with(Constraint::fill_horizontal(0.5))
//!             .with(Constraint::fill_vertical(0.5))
//!             .with(Constraint::CenterHorizontal)
//!             .with(Constraint::CenterVertical),
//!     ),
//! );
//! tree.attach(hud, panel).unwrap();
//! assert_eq!(tree.absolute_bounds(panel), Some(Rect::new(-0.5, -0.5, 1.0, 1.0)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod widget;

pub use animation::{AnimationKind, Animator, Easing, Transition, TransitionGroup, Tween};
pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use events::{Dispatcher, EventSender, UiEvent};
pub use input::{InputEvent, Key, MouseButton};
pub use layout::{Constraint, ConstraintSet, Rect, Viewport};
pub use render::{RenderCommand, UiRenderer, UiVertex};
pub use widget::{Widget, WidgetDocument, WidgetId, WidgetKind, WidgetTree};
