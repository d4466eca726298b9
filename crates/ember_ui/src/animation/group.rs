//! Transitions played together.

use serde::{Deserialize, Serialize};

use super::{Appearance, Transition};
use crate::error::{UiError, UiResult};

/// A bundle of transitions sharing one delay and one direction.
///
/// Transitions run in parallel, so the group's duration is the longest
/// member's. Each attribute may be targeted by at most one member;
/// [`push`](Self::push) rejects a second writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroup")]
pub struct TransitionGroup {
    /// Members, at most one per attribute.
    transitions: Vec<Transition>,
    /// Delay applied when playing from a fresh start.
    #[serde(default)]
    delay: f32,
}

/// Unchecked serde mirror of [`TransitionGroup`].
#[derive(Deserialize)]
struct RawGroup {
    #[serde(default)]
    transitions: Vec<Transition>,
    #[serde(default)]
    delay: f32,
}

impl TryFrom<RawGroup> for TransitionGroup {
    type Error = UiError;

    fn try_from(raw: RawGroup) -> UiResult<Self> {
        let mut group = Self::new().with_delay(raw.delay);
        for transition in raw.transitions {
            group.push(transition)?;
        }
        Ok(group)
    }
}

impl TransitionGroup {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transitions: Vec::new(),
            delay: 0.0,
        }
    }

    /// Copy of the configuration with playback state reset.
    #[must_use]
    pub fn configuration(&self) -> Self {
        Self {
            transitions: self.transitions.iter().map(Transition::configuration).collect(),
            delay: self.delay,
        }
    }

    /// Sets the start delay.
    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Adds a transition (builder form).
    ///
    /// # Errors
    ///
    /// Returns [`UiError::DuplicateTarget`] if another member already
    /// writes the same attribute.
    pub fn with(mut self, transition: Transition) -> UiResult<Self> {
        self.push(transition)?;
        Ok(self)
    }

    /// Adds a transition.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::DuplicateTarget`] if another member already
    /// writes the same attribute.
    pub fn push(&mut self, transition: Transition) -> UiResult<()> {
        let target = transition.target();
        if self.transitions.iter().any(|t| t.target() == target) {
            return Err(UiError::DuplicateTarget(target));
        }
        self.transitions.push(transition);
        Ok(())
    }

    /// Members in insertion order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The start delay.
    #[must_use]
    pub const fn delay(&self) -> f32 {
        self.delay
    }

    /// Returns true if no transition is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Plays every member in the given direction.
    ///
    /// Without `resume` every member is first seeked to the start of the
    /// direction (progress 0 forward, 1 reversed) and the group delay
    /// applies. With `resume` members continue from where they are, which
    /// lets a reverse interrupt a running forward play without a jump.
    pub fn play(&mut self, reverse: bool, resume: bool) {
        for transition in &mut self.transitions {
            if !resume {
                transition.set_reversed(reverse);
                transition.start(self.delay);
            } else if transition.is_reversed() == reverse {
                transition.resume();
            } else {
                transition.rewind(0.0);
            }
        }
    }

    /// Freezes every member.
    pub fn pause(&mut self) {
        self.transitions.iter_mut().for_each(Transition::pause);
    }

    /// Moves every member to progress 0.
    pub fn seek_to_start(&mut self) {
        self.transitions.iter_mut().for_each(Transition::seek_to_start);
    }

    /// Moves every member to progress 1.
    pub fn seek_to_end(&mut self) {
        self.transitions.iter_mut().for_each(Transition::seek_to_end);
    }

    /// Longest member duration, delay included.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.transitions
            .iter()
            .map(|t| self.delay + t.duration())
            .fold(0.0, f32::max)
    }

    /// Longest remaining time over running members; `0.0` if none run.
    #[must_use]
    pub fn remainder(&self) -> f32 {
        self.transitions
            .iter()
            .filter(|t| !t.is_done() && !t.is_paused())
            .map(Transition::remainder)
            .fold(0.0, f32::max)
    }

    /// Returns true when every member is done. Empty groups are done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.transitions.iter().all(Transition::is_done)
    }

    /// Returns true while some member is unpaused and not done.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.transitions
            .iter()
            .any(|t| !t.is_paused() && !t.is_done())
    }

    /// Returns true if the group last played in reverse.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.transitions.first().is_some_and(Transition::is_reversed)
    }

    /// Ticks every member.
    pub fn apply(&mut self, delta: f32, appearance: &mut Appearance) {
        for transition in &mut self.transitions {
            transition.apply(delta, appearance);
        }
    }
}
