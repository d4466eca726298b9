//! Animation system: easing curves, transitions and the per-widget animator.
//!
//! ```text
//! Animator ── 8 slots ──> TransitionGroup ──> Transition ──> Tween
//!   (who plays)            (played together)    (timing)      (what moves)
//! ```
//!
//! Transitions write into a widget's [`Appearance`], never into its
//! constraint-derived original bounds.

mod animator;
mod group;
mod transition;
mod tween;

pub use animator::{
    AnimationKind, Animator, AnimatorState, Channel, FinishedSet, UpdateOutcome,
};
pub use group::TransitionGroup;
pub use transition::Transition;
pub use tween::{Appearance, TransitionTarget, Tween};

use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out (snaps towards the target).
    #[default]
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Exponential ease-in-out.
    ExponentialInOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                // 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                // 2^(10(t-1))
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExponentialInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Instant => {
                if t > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
