//! Value curves written by transitions.

use serde::{Deserialize, Serialize};

use crate::layout::Rect;

/// The animated half of a widget's visual state.
///
/// `original_*` come from layout and are never written by a transition;
/// `bounds` and `alpha` are what renderers and hit-testing read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Current, possibly animated, bounds.
    pub bounds: Rect,
    /// Constraint-derived bounds.
    pub original_bounds: Rect,
    /// Current, possibly animated, opacity.
    pub alpha: f32,
    /// Configured opacity.
    pub original_alpha: f32,
}

impl Appearance {
    /// Creates an appearance resting at the given bounds and alpha.
    #[must_use]
    pub const fn new(bounds: Rect, alpha: f32) -> Self {
        Self {
            bounds,
            original_bounds: bounds,
            alpha,
            original_alpha: alpha,
        }
    }

    /// Drops any animated divergence.
    pub fn reset(&mut self) {
        self.bounds = self.original_bounds;
        self.alpha = self.original_alpha;
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Rect::ZERO, 1.0)
    }
}

/// The widget attribute a tween writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionTarget {
    /// Box position.
    Position,
    /// Box size.
    Size,
    /// Opacity.
    Alpha,
}

/// A typed value curve.
///
/// Position and size are written around the box centre so a translate
/// and a scale running in different groups compose in either order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tween {
    /// Offsets the box centre from its original centre.
    Translate {
        /// Offset at progress 0.
        from: [f32; 2],
        /// Offset at progress 1.
        to: [f32; 2],
    },
    /// Scales the original size, keeping the current centre.
    Scale {
        /// Factors at progress 0.
        from: [f32; 2],
        /// Factors at progress 1.
        to: [f32; 2],
    },
    /// Multiplies the original alpha.
    Fade {
        /// Factor at progress 0.
        from: f32,
        /// Factor at progress 1.
        to: f32,
    },
}

impl Tween {
    /// Returns the attribute this tween writes.
    #[must_use]
    pub const fn target(&self) -> TransitionTarget {
        match self {
            Self::Translate { .. } => TransitionTarget::Position,
            Self::Scale { .. } => TransitionTarget::Size,
            Self::Fade { .. } => TransitionTarget::Alpha,
        }
    }

    /// Writes the curve value at eased progress `t` onto `appearance`.
    pub fn write(&self, t: f32, appearance: &mut Appearance) {
        let original = appearance.original_bounds;
        match *self {
            Self::Translate { from, to } => {
                let (cx, cy) = original.center();
                let bounds = &mut appearance.bounds;
                bounds.x = cx + lerp(from[0], to[0], t) - bounds.width * 0.5;
                bounds.y = cy + lerp(from[1], to[1], t) - bounds.height * 0.5;
            }
            Self::Scale { from, to } => {
                let (cx, cy) = appearance.bounds.center();
                let bounds = &mut appearance.bounds;
                bounds.width = original.width * lerp(from[0], to[0], t);
                bounds.height = original.height * lerp(from[1], to[1], t);
                bounds.x = cx - bounds.width * 0.5;
                bounds.y = cy - bounds.height * 0.5;
            }
            Self::Fade { from, to } => {
                appearance.alpha = appearance.original_alpha * lerp(from, to, t);
            }
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
