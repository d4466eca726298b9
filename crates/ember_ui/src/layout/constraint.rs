//! Individual layout constraints.

use serde::{Deserialize, Serialize};

use super::{Rect, Viewport};

/// One step of a layout pipeline.
///
/// A constraint maps `(parent, child)` to a new child box and reads
/// nothing else, apart from the borrowed [`Viewport`] for the aspect
/// variants. Ratios are not validated: a negative ratio simply produces a
/// box outside the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Width becomes `parent.width * ratio`.
    FillHorizontal {
        /// Fraction of the parent width.
        ratio: f32,
    },
    /// Height becomes `parent.height * ratio`.
    FillVertical {
        /// Fraction of the parent height.
        ratio: f32,
    },
    /// X becomes `parent.width * ratio`.
    RelativeHorizontal {
        /// Fraction of the parent width.
        ratio: f32,
    },
    /// Y becomes `parent.height * ratio`.
    RelativeVertical {
        /// Fraction of the parent height.
        ratio: f32,
    },
    /// Centers the child horizontally.
    CenterHorizontal,
    /// Centers the child vertically.
    CenterVertical,
    /// Moves the child to the parent's left edge.
    LeftAlign,
    /// Moves the child to the parent's right edge.
    RightAlign,
    /// Moves the child to the parent's top edge.
    TopAlign,
    /// Moves the child to the parent's bottom edge.
    BottomAlign,
    /// Insets the child box on each side.
    Padding {
        /// Left inset.
        left: f32,
        /// Top inset.
        top: f32,
        /// Right inset.
        right: f32,
        /// Bottom inset.
        bottom: f32,
    },
    /// Height follows width so the box keeps its on-screen proportions.
    VerticalAspect {
        /// Extra height multiplier (`1.0` = square on screen).
        modifier: f32,
    },
    /// Width follows height so the box keeps its on-screen proportions.
    HorizontalAspect {
        /// Extra width multiplier (`1.0` = square on screen).
        modifier: f32,
    },
}

impl Constraint {
    /// Shorthand for [`Constraint::FillHorizontal`].
    #[must_use]
    pub const fn fill_horizontal(ratio: f32) -> Self {
        Self::FillHorizontal { ratio }
    }

    /// Shorthand for [`Constraint::FillVertical`].
    #[must_use]
    pub const fn fill_vertical(ratio: f32) -> Self {
        Self::FillVertical { ratio }
    }

    /// Shorthand for [`Constraint::RelativeHorizontal`].
    #[must_use]
    pub const fn relative_horizontal(ratio: f32) -> Self {
        Self::RelativeHorizontal { ratio }
    }

    /// Shorthand for [`Constraint::RelativeVertical`].
    #[must_use]
    pub const fn relative_vertical(ratio: f32) -> Self {
        Self::RelativeVertical { ratio }
    }

    /// Shorthand for [`Constraint::Padding`].
    #[must_use]
    pub const fn padding(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::Padding {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Shorthand for [`Constraint::VerticalAspect`].
    #[must_use]
    pub const fn vertical_aspect(modifier: f32) -> Self {
        Self::VerticalAspect { modifier }
    }

    /// Shorthand for [`Constraint::HorizontalAspect`].
    #[must_use]
    pub const fn horizontal_aspect(modifier: f32) -> Self {
        Self::HorizontalAspect { modifier }
    }

    /// Applies the constraint, producing a fresh child box.
    #[must_use]
    pub fn apply(&self, parent: Rect, child: Rect, viewport: &Viewport) -> Rect {
        let mut out = child;
        match *self {
            Self::FillHorizontal { ratio } => {
                out.width = parent.width * ratio;
                out.x = clamp_offset(out.x, parent.width, out.width);
            }
            Self::FillVertical { ratio } => {
                out.height = parent.height * ratio;
                out.y = clamp_offset(out.y, parent.height, out.height);
            }
            Self::RelativeHorizontal { ratio } => {
                out.x = clamp_offset(parent.width * ratio, parent.width, out.width);
            }
            Self::RelativeVertical { ratio } => {
                out.y = clamp_offset(parent.height * ratio, parent.height, out.height);
            }
            Self::CenterHorizontal => out.x = (parent.width - child.width) / 2.0,
            Self::CenterVertical => out.y = (parent.height - child.height) / 2.0,
            Self::LeftAlign => out.x = 0.0,
            Self::RightAlign => out.x = parent.width - child.width,
            Self::TopAlign => out.y = parent.height - child.height,
            Self::BottomAlign => out.y = 0.0,
            Self::Padding {
                left,
                top,
                right,
                bottom,
            } => {
                out.x += left;
                out.y += bottom;
                out.width -= left + right;
                out.height -= top + bottom;
            }
            Self::VerticalAspect { modifier } => {
                out.height = child.width * viewport.aspect_ratio() * modifier;
            }
            Self::HorizontalAspect { modifier } => {
                out.width = child.height / viewport.aspect_ratio() * modifier;
            }
        }
        out
    }
}

/// Keeps an offset inside `[0, parent_extent - child_extent]`.
///
/// The lower bound wins when the child is larger than the parent.
fn clamp_offset(offset: f32, parent_extent: f32, child_extent: f32) -> f32 {
    offset.min(parent_extent - child_extent).max(0.0)
}
