//! Per-widget animation state machine.
//!
//! Eight transition slots form four complementary pairs:
//!
//! | channel    | forward       | back           |
//! |------------|---------------|----------------|
//! | hover      | `MouseEnter`  | `MouseExit`    |
//! | press      | `MousePress`  | `MouseRelease` |
//! | visibility | `Show`        | `Hide`         |
//! | activation | `Activate`    | `Inactivate`   |
//!
//! A request either plays its own group or reverses its counterpart in
//! place, so interrupting an animation never jumps. While a show or hide
//! is in flight every other channel is frozen.

use serde::{Deserialize, Serialize};

use super::{Appearance, TransitionGroup};

/// The eight animation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Cursor entered the widget.
    MouseEnter,
    /// Cursor left the widget.
    MouseExit,
    /// Button went down on the widget.
    MousePress,
    /// Button came up after a press.
    MouseRelease,
    /// Widget is being shown.
    Show,
    /// Widget is being hidden.
    Hide,
    /// Widget became active.
    Activate,
    /// Widget became inactive.
    Inactivate,
}

impl AnimationKind {
    /// Every kind, in slot order.
    pub const ALL: [Self; 8] = [
        Self::MouseEnter,
        Self::MouseExit,
        Self::MousePress,
        Self::MouseRelease,
        Self::Show,
        Self::Hide,
        Self::Activate,
        Self::Inactivate,
    ];

    /// Slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other half of this kind's pair.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::MouseEnter => Self::MouseExit,
            Self::MouseExit => Self::MouseEnter,
            Self::MousePress => Self::MouseRelease,
            Self::MouseRelease => Self::MousePress,
            Self::Show => Self::Hide,
            Self::Hide => Self::Show,
            Self::Activate => Self::Inactivate,
            Self::Inactivate => Self::Activate,
        }
    }

    /// The channel this kind belongs to.
    #[must_use]
    pub const fn channel(self) -> Channel {
        match self {
            Self::MouseEnter | Self::MouseExit => Channel::Hover,
            Self::MousePress | Self::MouseRelease => Channel::Press,
            Self::Show | Self::Hide => Channel::Visibility,
            Self::Activate | Self::Inactivate => Channel::Activation,
        }
    }

    /// Flags a request of this kind arms its slot with.
    const fn rule(self) -> Rule {
        match self {
            Self::Show => Rule {
                ignore_input: true,
                hide_on_finish: false,
            },
            Self::Hide => Rule {
                ignore_input: true,
                hide_on_finish: true,
            },
            _ => Rule {
                ignore_input: false,
                hide_on_finish: false,
            },
        }
    }

    /// Observable state while a request of this kind is in flight.
    const fn state(self) -> AnimatorState {
        match self {
            Self::MouseEnter => AnimatorState::EnteringHover,
            Self::MouseExit => AnimatorState::ExitingHover,
            Self::MousePress => AnimatorState::Pressing,
            Self::MouseRelease => AnimatorState::Releasing,
            Self::Show => AnimatorState::Showing,
            Self::Hide => AnimatorState::Hiding,
            Self::Activate => AnimatorState::Activating,
            Self::Inactivate => AnimatorState::Deactivating,
        }
    }
}

/// One forward/back pair of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Mouse enter/exit.
    Hover,
    /// Mouse press/release.
    Press,
    /// Show/hide.
    Visibility,
    /// Activate/inactivate.
    Activation,
}

/// What a channel is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatorState {
    /// Nothing in flight.
    Idle,
    /// Playing towards hovered.
    EnteringHover,
    /// Playing away from hovered.
    ExitingHover,
    /// Playing towards pressed.
    Pressing,
    /// Playing away from pressed.
    Releasing,
    /// Playing towards shown.
    Showing,
    /// Playing towards hidden.
    Hiding,
    /// Playing towards active.
    Activating,
    /// Playing away from active.
    Deactivating,
}

/// Per-kind flags of the rule table.
#[derive(Debug, Clone, Copy)]
struct Rule {
    /// Freeze the non-visibility channels while in flight.
    ignore_input: bool,
    /// Hide the widget once finished.
    hide_on_finish: bool,
}

/// Snapshot of one group used to pick a plan.
#[derive(Debug, Clone, Copy)]
struct GroupStatus {
    configured: bool,
    done: bool,
    running: bool,
}

impl GroupStatus {
    fn of(group: &TransitionGroup) -> Self {
        Self {
            configured: !group.is_empty(),
            done: group.is_done(),
            running: group.is_running(),
        }
    }
}

/// What a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    /// Nothing configured for the pair.
    Idle,
    /// Play the requested kind's own group forward.
    PlayBegin {
        /// Continue from the current position instead of restarting.
        resume: bool,
    },
    /// Play the counterpart's group in reverse from where it is.
    ReverseEnd,
}

/// Transition table: `(begin, end)` statuses to a plan.
fn plan(begin: GroupStatus, end: GroupStatus) -> Plan {
    match (begin.configured, end.configured) {
        (false, false) => Plan::Idle,
        (true, false) => Plan::PlayBegin {
            resume: begin.running,
        },
        (false, true) => Plan::ReverseEnd,
        (true, true) if end.running => Plan::ReverseEnd,
        (true, true) => Plan::PlayBegin {
            resume: begin.running,
        },
    }
}

/// Bookkeeping of one slot.
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// The request currently driving this slot's group.
    requested: AnimationKind,
    ignore_mouse_input: bool,
    /// Seconds the slot must stay alive even after its group is done.
    wait_to_finish: f32,
    hide_widget_on_finish: bool,
    has_finished: bool,
}

impl Slot {
    const fn idle(kind: AnimationKind) -> Self {
        Self {
            requested: kind,
            ignore_mouse_input: false,
            wait_to_finish: 0.0,
            hide_widget_on_finish: false,
            has_finished: true,
        }
    }
}

/// Set of animation kinds, used to report completions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinishedSet(u8);

impl FinishedSet {
    /// Adds a kind.
    pub fn insert(&mut self, kind: AnimationKind) {
        self.0 |= 1 << kind.index();
    }

    /// Returns true if the kind is in the set.
    #[must_use]
    pub const fn contains(self, kind: AnimationKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    /// Returns true if no kind is in the set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the kinds in slot order.
    pub fn iter(self) -> impl Iterator<Item = AnimationKind> {
        AnimationKind::ALL.into_iter().filter(move |&k| self.contains(k))
    }
}

/// Result of one animator tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Requests that finished during this tick.
    pub finished: FinishedSet,
    /// A finished request asked for the widget to be made invisible.
    pub hide_widget: bool,
}

/// Per-widget orchestrator of the eight transition groups.
#[derive(Debug, Clone)]
pub struct Animator {
    groups: [TransitionGroup; 8],
    slots: [Slot; 8],
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            groups: Default::default(),
            slots: AnimationKind::ALL.map(Slot::idle),
        }
    }
}

impl Animator {
    /// Creates an animator with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the group played for `kind` (builder form).
    #[must_use]
    pub fn with(mut self, kind: AnimationKind, group: TransitionGroup) -> Self {
        self.set(kind, group);
        self
    }

    /// Configures the group played for `kind`, idling its slot.
    pub fn set(&mut self, kind: AnimationKind, group: TransitionGroup) {
        self.groups[kind.index()] = group;
        self.slots[kind.index()] = Slot::idle(kind);
    }

    /// The group configured for `kind`.
    #[must_use]
    pub fn group(&self, kind: AnimationKind) -> &TransitionGroup {
        &self.groups[kind.index()]
    }

    /// Returns true if `kind` has transitions.
    #[must_use]
    pub fn is_configured(&self, kind: AnimationKind) -> bool {
        !self.groups[kind.index()].is_empty()
    }

    /// Returns true if either half of the channel has transitions.
    #[must_use]
    pub fn channel_configured(&self, channel: Channel) -> bool {
        AnimationKind::ALL
            .iter()
            .any(|&k| k.channel() == channel && self.is_configured(k))
    }

    /// Starts a request and returns the time it will take, in seconds.
    ///
    /// `wait` keeps the request from finishing for at least that long.
    /// A pair with nothing configured is a no-op returning `0.0`.
    pub fn start(&mut self, kind: AnimationKind, wait: f32) -> f32 {
        let end = kind.counterpart();
        let plan = plan(
            GroupStatus::of(&self.groups[kind.index()]),
            GroupStatus::of(&self.groups[end.index()]),
        );

        let played = match plan {
            Plan::Idle => return 0.0,
            Plan::PlayBegin { resume } => {
                self.groups[kind.index()].play(false, resume);
                kind
            }
            Plan::ReverseEnd => {
                self.groups[end.index()].play(true, true);
                end
            }
        };

        let rule = kind.rule();
        self.slots[played.index()] = Slot {
            requested: kind,
            ignore_mouse_input: rule.ignore_input,
            wait_to_finish: wait,
            hide_widget_on_finish: rule.hide_on_finish,
            has_finished: false,
        };

        let remainder = self.groups[played.index()].remainder();
        tracing::trace!(?kind, ?played, ?plan, remainder, "animation started");
        remainder.max(wait)
    }

    /// Advances every live slot by `delta` seconds.
    pub fn update(&mut self, delta: f32, appearance: &mut Appearance) -> UpdateOutcome {
        let suppress = self.ignores_mouse_input();
        let mut outcome = UpdateOutcome::default();

        for kind in AnimationKind::ALL {
            if suppress && kind.channel() != Channel::Visibility {
                continue;
            }
            let slot = &mut self.slots[kind.index()];
            if slot.has_finished {
                continue;
            }

            let group = &mut self.groups[kind.index()];
            slot.wait_to_finish -= delta;
            group.apply(delta, appearance);

            if group.is_done() && slot.wait_to_finish <= 0.0 {
                outcome.finished.insert(slot.requested);
                outcome.hide_widget |= slot.hide_widget_on_finish;
                tracing::trace!(requested = ?slot.requested, "animation finished");

                slot.ignore_mouse_input = false;
                slot.wait_to_finish = 0.0;
                slot.hide_widget_on_finish = false;
                slot.has_finished = true;
            }
        }

        outcome
    }

    /// Returns true while a show or hide freezes the other channels.
    #[must_use]
    pub fn ignores_mouse_input(&self) -> bool {
        self.slots
            .iter()
            .any(|s| !s.has_finished && s.ignore_mouse_input)
    }

    /// Returns true while a request of `kind` is in flight.
    #[must_use]
    pub fn is_playing(&self, kind: AnimationKind) -> bool {
        self.slots
            .iter()
            .any(|s| !s.has_finished && s.requested == kind)
    }

    /// What the channel is currently doing.
    #[must_use]
    pub fn state(&self, channel: Channel) -> AnimatorState {
        self.slots
            .iter()
            .find(|s| !s.has_finished && s.requested.channel() == channel)
            .map_or(AnimatorState::Idle, |s| s.requested.state())
    }

    /// Longest remaining time over live slots; `0.0` when idle.
    #[must_use]
    pub fn remainder(&self) -> f32 {
        AnimationKind::ALL
            .iter()
            .filter(|k| !self.slots[k.index()].has_finished)
            .map(|k| {
                let slot = &self.slots[k.index()];
                self.groups[k.index()].remainder().max(slot.wait_to_finish)
            })
            .fold(0.0, f32::max)
    }

    /// Returns true if nothing is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(|s| s.has_finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, Transition, Tween};
    use crate::layout::Rect;

    fn fade(from: f32, to: f32, duration: f32) -> TransitionGroup {
        TransitionGroup::new()
            .with(Transition::new(Tween::Fade { from, to }, duration).with_easing(Easing::Linear))
            .unwrap()
    }

    fn grow(duration: f32) -> TransitionGroup {
        TransitionGroup::new()
            .with(
                Transition::new(
                    Tween::Scale {
                        from: [1.0, 1.0],
                        to: [1.5, 1.5],
                    },
                    duration,
                )
                .with_easing(Easing::Linear),
            )
            .unwrap()
    }

    fn appearance() -> Appearance {
        Appearance::new(Rect::new(0.0, 0.0, 1.0, 1.0), 1.0)
    }

    #[test]
    fn test_plan_table() {
        let none = GroupStatus {
            configured: false,
            done: true,
            running: false,
        };
        let idle = GroupStatus {
            configured: true,
            done: false,
            running: false,
        };
        let finished = GroupStatus {
            configured: true,
            done: true,
            running: false,
        };
        let running = GroupStatus {
            configured: true,
            done: false,
            running: true,
        };

        assert_eq!(plan(none, none), Plan::Idle);
        assert_eq!(plan(idle, none), Plan::PlayBegin { resume: false });
        assert_eq!(plan(running, none), Plan::PlayBegin { resume: true });
        assert_eq!(plan(finished, none), Plan::PlayBegin { resume: false });
        assert_eq!(plan(none, running), Plan::ReverseEnd);
        assert_eq!(plan(idle, running), Plan::ReverseEnd);
        assert_eq!(plan(finished, finished), Plan::PlayBegin { resume: false });
        assert_eq!(plan(running, finished), Plan::PlayBegin { resume: true });
    }

    #[test]
    fn test_unconfigured_start_is_noop() {
        let mut animator = Animator::new();
        assert_eq!(animator.start(AnimationKind::MouseEnter, 0.0), 0.0);
        assert!(animator.is_idle());
        assert_eq!(animator.state(Channel::Hover), AnimatorState::Idle);
    }

    #[test]
    fn test_hover_enter_then_exit_reverses_single_group() {
        let mut animator = Animator::new().with(AnimationKind::MouseEnter, grow(1.0));
        let mut state = appearance();

        animator.start(AnimationKind::MouseEnter, 0.0);
        animator.update(0.5, &mut state);
        assert!((state.bounds.width - 1.25).abs() < 1e-6);
        assert_eq!(animator.state(Channel::Hover), AnimatorState::EnteringHover);

        animator.start(AnimationKind::MouseExit, 0.0);
        assert_eq!(animator.state(Channel::Hover), AnimatorState::ExitingHover);
        assert!((animator.remainder() - 0.5).abs() < 1e-6);

        let outcome = animator.update(0.5, &mut state);
        assert!(outcome.finished.contains(AnimationKind::MouseExit));
        assert!((state.bounds.width - 1.0).abs() < 1e-6);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_first_play_honours_group_delay() {
        let mut animator =
            Animator::new().with(AnimationKind::MouseEnter, fade(1.0, 0.0, 1.0).with_delay(0.5));
        let mut state = appearance();

        let duration = animator.start(AnimationKind::MouseEnter, 0.0);
        assert!((duration - 1.5).abs() < 1e-6);
        animator.update(0.25, &mut state);
        assert_eq!(state.alpha, 1.0);

        animator.update(0.75, &mut state);
        assert!((state.alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_show_interrupting_hide_reverses_in_place() {
        let mut animator = Animator::new()
            .with(AnimationKind::Show, fade(0.0, 1.0, 1.0))
            .with(AnimationKind::Hide, fade(1.0, 0.0, 1.0));
        let mut state = appearance();

        animator.start(AnimationKind::Hide, 0.0);
        animator.update(0.25, &mut state);
        let hide_left = animator.group(AnimationKind::Hide).remainder();
        let alpha = state.alpha;

        let duration = animator.start(AnimationKind::Show, 0.0);
        assert!(duration <= hide_left);
        assert!(animator.remainder() <= hide_left);
        assert!(animator.group(AnimationKind::Hide).is_reversed());
        assert_eq!(animator.state(Channel::Visibility), AnimatorState::Showing);

        animator.update(0.0, &mut state);
        assert!((state.alpha - alpha).abs() < 1e-6);

        let outcome = animator.update(1.0, &mut state);
        assert!(outcome.finished.contains(AnimationKind::Show));
        assert!(!outcome.hide_widget);
        assert_eq!(state.alpha, 1.0);
    }

    #[test]
    fn test_hide_requests_widget_hide_on_finish() {
        let mut animator = Animator::new().with(AnimationKind::Hide, fade(1.0, 0.0, 0.5));
        let mut state = appearance();

        animator.start(AnimationKind::Hide, 0.0);
        assert!(!animator.update(0.25, &mut state).hide_widget);
        let outcome = animator.update(0.25, &mut state);
        assert!(outcome.hide_widget);
        assert!(outcome.finished.contains(AnimationKind::Hide));
    }

    #[test]
    fn test_wait_to_finish_delays_completion() {
        let mut animator = Animator::new().with(AnimationKind::Activate, grow(0.1));
        let mut state = appearance();

        assert!((animator.start(AnimationKind::Activate, 0.5) - 0.5).abs() < f32::EPSILON);
        assert!(animator.update(0.2, &mut state).finished.is_empty());
        assert!(animator.is_playing(AnimationKind::Activate));

        let outcome = animator.update(0.4, &mut state);
        assert!(outcome.finished.contains(AnimationKind::Activate));
    }

    #[test]
    fn test_visibility_freezes_other_channels() {
        let mut animator = Animator::new()
            .with(AnimationKind::MouseEnter, grow(1.0))
            .with(AnimationKind::Show, fade(0.0, 1.0, 1.0));
        let mut state = appearance();

        animator.start(AnimationKind::Show, 0.0);
        animator.start(AnimationKind::MouseEnter, 0.0);
        assert!(animator.ignores_mouse_input());

        animator.update(0.5, &mut state);
        assert_eq!(state.bounds.width, 1.0);
        assert!((state.alpha - 0.5).abs() < 1e-6);

        animator.update(0.5, &mut state);
        assert!(!animator.ignores_mouse_input());

        animator.update(0.5, &mut state);
        assert!((state.bounds.width - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_finished_set_iterates_in_slot_order() {
        let mut set = FinishedSet::default();
        set.insert(AnimationKind::Hide);
        set.insert(AnimationKind::MouseEnter);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![AnimationKind::MouseEnter, AnimationKind::Hide]
        );
    }
}
