//! Core widget type.

use std::fmt;

use ember_core::Handle;

use super::WidgetKind;
use crate::animation::{AnimationKind, Animator, Appearance, Channel, UpdateOutcome};
use crate::events::{EventSender, UiEvent};
use crate::input::Key;
use crate::layout::{ConstraintSet, Rect, Viewport};

/// Unique identifier for a widget.
///
/// Backed by a generation-checked [`Handle`], so an id is never confused
/// with a widget created after its owner was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(Handle);

impl WidgetId {
    /// Id of a widget not yet inserted into a tree.
    pub const NULL: Self = Self(Handle::NULL);

    /// Wraps a pool handle.
    #[must_use]
    pub const fn from_handle(handle: Handle) -> Self {
        Self(handle)
    }

    /// Returns the pool handle.
    #[must_use]
    pub const fn handle(self) -> Handle {
        self.0
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0.to_bits()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Widget state flags (bitfield for efficiency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// A hide is pending on the animator.
    pub const ANIMATOR_HIDDEN: u32 = 1 << 1;
    /// Widget receives input.
    pub const INTERACTIVE: u32 = 1 << 2;
    /// Widget is active (focused).
    pub const ACTIVE: u32 = 1 << 3;
    /// Widget is checked.
    pub const CHECKED: u32 = 1 << 4;
    /// Widget may be checked.
    pub const CHECKABLE: u32 = 1 << 5;
    /// Cursor is over the widget.
    pub const MOUSE_OVER: u32 = 1 << 6;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::INTERACTIVE);

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Visual interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// At rest.
    #[default]
    Normal,
    /// Cursor over the widget.
    Hover,
    /// Press in progress.
    Press,
    /// At rest while checked.
    Checked,
}

/// A node of the widget tree.
///
/// Geometry is parent-relative. Each layout pass folds the widget's
/// constraints over its base box; animation then diverges the current
/// bounds from the resulting original bounds until the next pass.
#[derive(Debug, Clone)]
pub struct Widget {
    id: WidgetId,
    name: String,
    kind: WidgetKind,
    /// Declared box every layout pass starts from.
    base_bounds: Rect,
    appearance: Appearance,
    /// Size hint overriding the base box size during layout.
    strict_size: Option<[f32; 2]>,
    flags: WidgetFlags,
    state: VisualState,
    constraints: ConstraintSet,
    animator: Animator,
    pub(super) children: Vec<WidgetId>,
    pub(super) parent: Option<WidgetId>,
    layer_root: bool,
}

impl Widget {
    /// Creates a detached widget with an empty box.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            id: WidgetId::NULL,
            name: name.into(),
            kind,
            base_bounds: Rect::ZERO,
            appearance: Appearance::default(),
            strict_size: None,
            flags: WidgetFlags::DEFAULT,
            state: VisualState::Normal,
            constraints: ConstraintSet::new(),
            animator: Animator::new(),
            children: Vec::new(),
            parent: None,
            layer_root: false,
        }
    }

    /// Creates the root of a layer, pinned to [`Rect::SCREEN`].
    pub(super) fn layer(name: impl Into<String>) -> Self {
        let mut root = Self::new(name, WidgetKind::Container).with_bounds(Rect::SCREEN);
        root.layer_root = true;
        root
    }

    /// Sets the declared box (builder form).
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Sets the constraints (builder form).
    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the animator (builder form).
    #[must_use]
    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = animator;
        self
    }

    /// Sets the opacity (builder form).
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Makes the widget checkable (builder form).
    #[must_use]
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.set_checkable(checkable);
        self
    }

    /// Sets the size hint (builder form).
    #[must_use]
    pub fn with_strict_size(mut self, size: Option<[f32; 2]>) -> Self {
        self.strict_size = size;
        self
    }

    pub(super) fn set_id(&mut self, id: WidgetId) {
        self.id = id;
    }

    /// The widget id, [`WidgetId::NULL`] until inserted.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// The (non-unique) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the widget.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The widget type.
    #[must_use]
    pub const fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Mutable access to type-specific data.
    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    /// Current, possibly animated, parent-relative bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.appearance.bounds
    }

    /// Constraint-derived bounds.
    #[must_use]
    pub const fn original_bounds(&self) -> Rect {
        self.appearance.original_bounds
    }

    /// The declared box layout starts from.
    #[must_use]
    pub const fn base_bounds(&self) -> Rect {
        self.base_bounds
    }

    /// Repositions the widget by hand. Takes effect immediately and
    /// becomes the starting box of later layout passes.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.base_bounds = bounds;
        self.appearance.original_bounds = bounds;
        self.appearance.bounds = bounds;
    }

    /// Current, possibly animated, opacity.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.appearance.alpha
    }

    /// Configured opacity.
    #[must_use]
    pub const fn original_alpha(&self) -> f32 {
        self.appearance.original_alpha
    }

    /// Sets the configured and current opacity.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.appearance.original_alpha = alpha;
        self.appearance.alpha = alpha;
    }

    /// The animated visual state.
    #[must_use]
    pub const fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The layout size hint.
    #[must_use]
    pub const fn strict_size(&self) -> Option<[f32; 2]> {
        self.strict_size
    }

    /// Sets the layout size hint.
    pub fn set_strict_size(&mut self, size: Option<[f32; 2]>) {
        self.strict_size = size;
    }

    /// The layout constraints.
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Mutable constraints. Relayout the tree to apply changes.
    pub fn constraints_mut(&mut self) -> &mut ConstraintSet {
        &mut self.constraints
    }

    /// The animator.
    #[must_use]
    pub const fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Mutable animator.
    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Children, bottom-most first.
    #[must_use]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// The parent, `None` for layer roots and detached widgets.
    #[must_use]
    pub const fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Returns true for the root of a layer.
    #[must_use]
    pub const fn is_layer_root(&self) -> bool {
        self.layer_root
    }

    /// Raw flags.
    #[must_use]
    pub const fn flags(&self) -> WidgetFlags {
        self.flags
    }

    /// The visual interaction state.
    #[must_use]
    pub const fn state(&self) -> VisualState {
        self.state
    }

    /// Returns true if the widget is drawn and hit-tested.
    ///
    /// A hiding widget stays visible until its hide animation finishes.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true while a hide is pending on the animator.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.flags.has(WidgetFlags::ANIMATOR_HIDDEN)
    }

    /// Returns true if the widget receives input.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.flags.has(WidgetFlags::INTERACTIVE)
    }

    /// Enables or disables input for the widget and its subtree.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.flags.assign(WidgetFlags::INTERACTIVE, interactive);
    }

    /// Returns true if the widget is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.flags.has(WidgetFlags::ACTIVE)
    }

    /// Returns true if the cursor is over the widget.
    #[must_use]
    pub const fn is_cursor_over(&self) -> bool {
        self.flags.has(WidgetFlags::MOUSE_OVER)
    }

    /// Returns true if the widget may be checked.
    #[must_use]
    pub const fn is_checkable(&self) -> bool {
        self.flags.has(WidgetFlags::CHECKABLE)
    }

    /// Returns true if the widget is checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.flags.has(WidgetFlags::CHECKED)
    }

    /// Allows or forbids checking. Forbidding also unchecks.
    pub fn set_checkable(&mut self, checkable: bool) {
        self.flags.assign(WidgetFlags::CHECKABLE, checkable);
        if !checkable {
            self.set_checked(false);
        }
    }

    /// Sets the checked bit. No-op on a non-checkable widget.
    pub fn set_checked(&mut self, checked: bool) {
        if checked && !self.is_checkable() {
            return;
        }
        self.flags.assign(WidgetFlags::CHECKED, checked);
        if matches!(self.state, VisualState::Normal | VisualState::Checked) {
            self.state = self.rest_state();
        }
    }

    /// Flips the checked bit. No-op on a non-checkable widget.
    pub fn toggle(&mut self) {
        if self.is_checkable() {
            self.set_checked(!self.is_checked());
        }
    }

    /// Slider value, if this is a slider.
    #[must_use]
    pub const fn value(&self) -> Option<f32> {
        match self.kind {
            WidgetKind::Slider { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Text contents, if this is a text field.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            WidgetKind::TextField { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Shows the widget, playing the show animation if one is configured.
    pub fn show(&mut self) {
        if (self.is_visible() && !self.is_hidden()) || self.animator.is_playing(AnimationKind::Show) {
            return;
        }
        self.flags.set(WidgetFlags::VISIBLE);
        if self.animator.channel_configured(Channel::Visibility) {
            self.animator.start(AnimationKind::Show, 0.0);
        } else {
            self.flags.clear(WidgetFlags::ANIMATOR_HIDDEN);
        }
    }

    /// Hides the widget once its hide animation finishes, or immediately
    /// if none is configured.
    pub fn hide(&mut self) {
        if !self.is_visible() || self.animator.is_playing(AnimationKind::Hide) {
            return;
        }
        if self.animator.channel_configured(Channel::Visibility) {
            self.flags.set(WidgetFlags::ANIMATOR_HIDDEN);
            self.animator.start(AnimationKind::Hide, 0.0);
        } else {
            self.do_made_invisible();
        }
    }

    /// Makes the widget invisible for drawing and hit-testing.
    pub fn do_made_invisible(&mut self) {
        self.flags.clear(WidgetFlags::VISIBLE);
        self.flags.clear(WidgetFlags::ANIMATOR_HIDDEN);
        self.flags.clear(WidgetFlags::MOUSE_OVER);
        self.state = self.rest_state();
    }

    /// Recomputes this widget's bounds against a new parent box.
    ///
    /// Discards any animated divergence, then ticks the animator with a
    /// zero delta so in-flight transitions re-apply at their current
    /// progress. Children are laid out by the tree afterwards.
    pub fn on_parent_change(&mut self, parent: Rect, viewport: &Viewport) {
        if !self.layer_root {
            let mut start = self.base_bounds;
            if let Some([width, height]) = self.strict_size {
                start.width = width;
                start.height = height;
            }
            self.appearance.original_bounds = self.constraints.apply(parent, start, viewport);
        }
        self.appearance.bounds = self.appearance.original_bounds;
        self.update(0.0);
    }

    /// Advances the animator and applies completion side effects.
    pub fn update(&mut self, delta: f32) -> UpdateOutcome {
        let outcome = self.animator.update(delta, &mut self.appearance);
        if outcome.finished.contains(AnimationKind::Show) {
            self.flags.clear(WidgetFlags::ANIMATOR_HIDDEN);
        }
        if outcome.hide_widget {
            self.do_made_invisible();
        }
        outcome
    }

    /// Cursor entered the widget.
    pub fn do_mouse_enter(&mut self) {
        self.flags.set(WidgetFlags::MOUSE_OVER);
        if self.state != VisualState::Press {
            self.state = VisualState::Hover;
        }
        self.animator.start(AnimationKind::MouseEnter, 0.0);
    }

    /// Cursor left the widget.
    pub fn do_mouse_exit(&mut self) {
        self.flags.clear(WidgetFlags::MOUSE_OVER);
        if self.state == VisualState::Hover {
            self.state = self.rest_state();
        }
        self.animator.start(AnimationKind::MouseExit, 0.0);
    }

    /// Tracks the cursor. `abs` is the widget's absolute box; `occluded`
    /// means a widget above already claimed the point.
    ///
    /// Returns true if the widget absorbs the move.
    pub fn do_mouse_move(
        &mut self,
        abs: Rect,
        x: f32,
        y: f32,
        occluded: bool,
        sender: &EventSender,
    ) -> bool {
        let over = !occluded && abs.contains(x, y);
        if over != self.is_cursor_over() {
            if over {
                self.do_mouse_enter();
            } else {
                self.do_mouse_exit();
            }
        }
        if self.state == VisualState::Press {
            self.drag_to(abs, x, sender);
        }
        over && self.kind.absorbs_input()
    }

    /// Starts a press if the cursor is over the widget.
    pub fn do_mouse_press(&mut self, abs: Rect, x: f32, sender: &EventSender) -> bool {
        if !self.kind.absorbs_input() || !self.is_cursor_over() {
            return false;
        }
        self.state = VisualState::Press;
        self.animator.start(AnimationKind::MousePress, 0.0);
        sender.emit(UiEvent::WidgetPress(self.id));
        self.do_activate(sender);
        self.drag_to(abs, x, sender);
        true
    }

    /// Completes a press that started on this widget.
    pub fn do_mouse_release(&mut self, sender: &EventSender) -> bool {
        if self.state != VisualState::Press {
            return false;
        }
        self.animator.start(AnimationKind::MouseRelease, 0.0);
        if self.is_cursor_over() {
            sender.emit(UiEvent::WidgetRelease(self.id));
            self.toggle();
            self.state = VisualState::Hover;
        } else {
            self.state = self.rest_state();
        }
        true
    }

    /// Scrolls a hovered slider.
    pub fn do_mouse_scroll(&mut self, dy: f32, sender: &EventSender) -> bool {
        if !self.is_cursor_over() {
            return false;
        }
        match self.kind {
            WidgetKind::Slider { value, step } => {
                self.set_slider_value(value + step * dy, sender);
                true
            }
            _ => false,
        }
    }

    /// Handles a key press or repeat on the active widget.
    pub fn do_key_press(&mut self, key: Key, text: Option<char>, sender: &EventSender) -> bool {
        if !self.is_active() {
            return false;
        }
        let id = self.id;
        match &mut self.kind {
            WidgetKind::Container => false,
            WidgetKind::Button => {
                if !matches!(key, Key::Enter | Key::Space) {
                    return false;
                }
                sender.emit(UiEvent::WidgetPress(id));
                sender.emit(UiEvent::WidgetRelease(id));
                self.toggle();
                true
            }
            WidgetKind::Slider { value, step } => {
                let delta = match key {
                    Key::Left | Key::Down => -*step,
                    Key::Right | Key::Up => *step,
                    _ => return false,
                };
                let target = *value + delta;
                self.set_slider_value(target, sender);
                true
            }
            WidgetKind::TextField { text: contents, max_len } => match (key, text) {
                (Key::Enter, _) => {
                    sender.emit(UiEvent::TextSubmit {
                        id,
                        text: contents.clone(),
                    });
                    true
                }
                (Key::Backspace, _) => {
                    if contents.pop().is_some() {
                        sender.emit(UiEvent::TextUpdate {
                            id,
                            text: contents.clone(),
                        });
                    }
                    true
                }
                (_, Some(ch)) if !ch.is_control() => {
                    if *max_len == 0 || contents.chars().count() < *max_len {
                        contents.push(ch);
                        sender.emit(UiEvent::TextUpdate {
                            id,
                            text: contents.clone(),
                        });
                    }
                    true
                }
                _ => false,
            },
        }
    }

    /// Key releases are consumed by an active control.
    #[must_use]
    pub fn do_key_release(&self, _key: Key) -> bool {
        self.is_active() && self.kind.absorbs_input()
    }

    /// Makes the widget active.
    pub fn do_activate(&mut self, sender: &EventSender) {
        if self.is_active() {
            return;
        }
        self.flags.set(WidgetFlags::ACTIVE);
        self.animator.start(AnimationKind::Activate, 0.0);
        sender.emit(UiEvent::WidgetActive(self.id));
    }

    /// Makes the widget inactive.
    pub fn do_inactivate(&mut self, sender: &EventSender) {
        if !self.is_active() {
            return;
        }
        self.flags.clear(WidgetFlags::ACTIVE);
        self.animator.start(AnimationKind::Inactivate, 0.0);
        sender.emit(UiEvent::WidgetInactive(self.id));
    }

    /// Restores flags and state from a document.
    pub(super) fn restore_flags(&mut self, visible: bool, interactive: bool, checkable: bool, checked: bool) {
        self.flags.assign(WidgetFlags::VISIBLE, visible);
        self.flags.assign(WidgetFlags::INTERACTIVE, interactive);
        self.set_checkable(checkable);
        self.set_checked(checked);
    }

    /// Restores layout results from a document.
    pub(super) fn restore_appearance(&mut self, base: Rect, appearance: Appearance) {
        self.base_bounds = base;
        self.appearance = appearance;
    }

    fn rest_state(&self) -> VisualState {
        if self.is_checked() {
            VisualState::Checked
        } else {
            VisualState::Normal
        }
    }

    fn drag_to(&mut self, abs: Rect, x: f32, sender: &EventSender) {
        if matches!(self.kind, WidgetKind::Slider { .. }) && abs.width > 0.0 {
            self.set_slider_value((x - abs.x) / abs.width, sender);
        }
    }

    fn set_slider_value(&mut self, target: f32, sender: &EventSender) {
        if let WidgetKind::Slider { value, .. } = &mut self.kind {
            let target = target.clamp(0.0, 1.0);
            if (target - *value).abs() > f32::EPSILON {
                *value = target;
                sender.emit(UiEvent::WidgetProgress {
                    id: self.id,
                    value: target,
                });
            }
        }
    }
}
