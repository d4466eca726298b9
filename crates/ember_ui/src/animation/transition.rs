//! Time-based animation of a single widget attribute.

use serde::{Deserialize, Serialize};

use super::{Appearance, Easing, TransitionTarget, Tween};

/// A tween driven by a clock.
///
/// Lifecycle: created paused at progress 0, [`start`](Self::start)ed,
/// ticked by [`apply`](Self::apply) until [`is_done`](Self::is_done),
/// and re-entered through [`pause`](Self::pause) or
/// [`rewind`](Self::rewind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// What moves.
    tween: Tween,
    /// Curve shaping the progress ratio.
    #[serde(default)]
    easing: Easing,
    /// Length in seconds.
    duration: f32,
    /// Remaining delay before time starts flowing.
    #[serde(skip)]
    delay: f32,
    /// Seconds into the curve, in `[0, duration]`.
    #[serde(skip)]
    elapsed: f32,
    /// Frozen when true.
    #[serde(skip, default = "paused_default")]
    paused: bool,
    /// Running back towards progress 0 when true.
    #[serde(skip)]
    reversed: bool,
}

const fn paused_default() -> bool {
    true
}

impl Transition {
    /// Creates a paused transition at progress 0.
    ///
    /// Negative durations are treated as zero.
    #[must_use]
    pub fn new(tween: Tween, duration: f32) -> Self {
        Self {
            tween,
            easing: Easing::default(),
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            paused: true,
            reversed: false,
        }
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Copy with the same curve and playback state reset.
    #[must_use]
    pub fn configuration(&self) -> Self {
        Self::new(self.tween, self.duration).with_easing(self.easing)
    }

    /// The value curve.
    #[must_use]
    pub const fn tween(&self) -> &Tween {
        &self.tween
    }

    /// The attribute this transition writes.
    #[must_use]
    pub const fn target(&self) -> TransitionTarget {
        self.tween.target()
    }

    /// The easing curve.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Length in seconds, excluding delay.
    #[must_use]
    pub const fn duration(&self) -> f32 {
        self.duration
    }

    /// Seconds into the curve.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Remaining delay.
    #[must_use]
    pub const fn delay(&self) -> f32 {
        self.delay
    }

    /// Returns true while frozen.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns true while running towards progress 0.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns true once the clock reached the end of its direction.
    #[must_use]
    pub fn is_done(&self) -> bool {
        if self.reversed {
            self.elapsed <= 0.0
        } else {
            self.elapsed >= self.duration
        }
    }

    /// Seconds left until done, delay included.
    #[must_use]
    pub fn remainder(&self) -> f32 {
        let curve = if self.reversed {
            self.elapsed
        } else {
            self.duration - self.elapsed
        };
        self.delay.max(0.0) + curve.max(0.0)
    }

    /// Progress ratio in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else if self.reversed {
            0.0
        } else {
            1.0
        }
    }

    /// Restarts from the beginning of the current direction and unpauses.
    pub fn start(&mut self, delay: f32) {
        self.elapsed = if self.reversed { self.duration } else { 0.0 };
        self.delay = delay.max(0.0);
        self.paused = false;
    }

    /// Unpauses without moving the clock.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Freezes the clock where it is.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Flips direction in place and unpauses.
    pub fn rewind(&mut self, delay: f32) {
        self.reversed = !self.reversed;
        self.delay = delay.max(0.0);
        self.paused = false;
    }

    /// Sets the direction without touching the clock.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Moves the clock to progress 0.
    pub fn seek_to_start(&mut self) {
        self.elapsed = 0.0;
    }

    /// Moves the clock to progress 1.
    pub fn seek_to_end(&mut self) {
        self.elapsed = self.duration;
    }

    /// Advances the clock by `delta` seconds and writes the curve value.
    ///
    /// Delay is consumed first; nothing is written while any remains.
    pub fn apply(&mut self, delta: f32, appearance: &mut Appearance) {
        if self.paused {
            return;
        }

        let mut delta = delta.max(0.0);
        if self.delay > 0.0 {
            self.delay -= delta;
            if self.delay > 0.0 {
                return;
            }
            delta = -self.delay;
            self.delay = 0.0;
        }

        let step = if self.reversed { -delta } else { delta };
        self.elapsed = (self.elapsed + step).clamp(0.0, self.duration.max(0.0));

        self.tween.write(self.easing.apply(self.progress()), appearance);
    }
}
