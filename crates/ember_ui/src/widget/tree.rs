//! Widget tree for hierarchical UI management.
//!
//! The tree owns every widget in a generational [`Pool`]; parents refer to
//! children by [`WidgetId`] and children keep a non-owning parent id. Each
//! layer is a separate root pinned to [`Rect::SCREEN`]; later layers draw
//! above and are hit-tested before earlier ones.

use ember_core::Pool;

use super::{Widget, WidgetId, WidgetKind};
use crate::config::UiConfig;
use crate::error::{UiError, UiResult};
use crate::events::{Dispatcher, EventSender};
use crate::input::{InputEvent, MouseButton};
use crate::layout::{Rect, Viewport};
use crate::render::UiRenderer;

/// Manages the widget hierarchy.
pub struct WidgetTree {
    widgets: Pool<Widget>,
    layers: Vec<WidgetId>,
    viewport: Viewport,
    dispatcher: Dispatcher,
    sender: EventSender,
}

impl WidgetTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new(config: &UiConfig) -> Self {
        let dispatcher = Dispatcher::new(config.events.capacity);
        let sender = dispatcher.sender();
        Self {
            widgets: Pool::with_capacity(256),
            layers: Vec::with_capacity(4),
            viewport: config.window,
            dispatcher,
            sender,
        }
    }

    /// Takes ownership of a detached widget and returns its id.
    pub fn insert(&mut self, mut widget: Widget) -> WidgetId {
        widget.children.clear();
        widget.parent = None;
        let id = WidgetId::from_handle(self.widgets.insert(widget));
        if let Some(widget) = self.widgets.get_mut(id.handle()) {
            widget.set_id(id);
            tracing::debug!(%id, name = widget.name(), "widget created");
        }
        id
    }

    /// Creates a detached widget with an empty box.
    pub fn create(&mut self, name: impl Into<String>, kind: WidgetKind) -> WidgetId {
        self.insert(Widget::new(name, kind))
    }

    /// Adds a layer above every existing one and returns its root.
    pub fn add_layer(&mut self, name: impl Into<String>) -> WidgetId {
        let id = self.insert(Widget::layer(name));
        self.push_layer(id);
        id
    }

    pub(super) fn push_layer(&mut self, id: WidgetId) {
        tracing::debug!(%id, index = self.layers.len(), "layer added");
        self.layers.push(id);
    }

    /// Layer roots, bottom-most first.
    #[must_use]
    pub fn layers(&self) -> &[WidgetId] {
        &self.layers
    }

    /// Appends `child` as the topmost child of `parent` and lays it out.
    ///
    /// # Errors
    ///
    /// Fails if either id is stale, if `child` is a layer root or already
    /// has a parent, or if `child` is `parent` or one of its ancestors.
    pub fn attach(&mut self, parent: WidgetId, child: WidgetId) -> UiResult<()> {
        self.link(parent, child)?;
        self.relayout(child);
        Ok(())
    }

    /// Validated parent/child linking without a layout pass.
    pub(super) fn link(&mut self, parent: WidgetId, child: WidgetId) -> UiResult<()> {
        self.require(parent)?;
        let node = self.require(child)?;
        if node.is_layer_root() {
            return Err(UiError::LayerRoot(child));
        }
        if let Some(current) = node.parent() {
            return Err(UiError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(UiError::Cycle { parent, child });
        }

        if let Some(node) = self.widgets.get_mut(child.handle()) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.widgets.get_mut(parent.handle()) {
            node.children.push(child);
        }
        Ok(())
    }

    /// Unlinks `child` from its parent, keeping the subtree alive.
    ///
    /// # Errors
    ///
    /// Fails if `child` is stale.
    pub fn detach(&mut self, child: WidgetId) -> UiResult<()> {
        let parent = self.require(child)?.parent();
        if let Some(parent) = parent {
            if let Some(node) = self.widgets.get_mut(parent.handle()) {
                node.children.retain(|&c| c != child);
            }
        }
        if let Some(node) = self.widgets.get_mut(child.handle()) {
            node.parent = None;
        }
        Ok(())
    }

    /// Destroys a widget and its whole subtree. Returns how many widgets
    /// were removed.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn remove(&mut self, id: WidgetId) -> UiResult<usize> {
        self.detach(id)?;
        self.layers.retain(|&l| l != id);

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(widget) = self.widgets.remove(next.handle()) {
                stack.extend_from_slice(widget.children());
                removed += 1;
            }
        }
        tracing::debug!(%id, removed, "widget subtree removed");
        Ok(removed)
    }

    /// Gets a widget by id.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id.handle())
    }

    /// Gets mutable access to a widget.
    ///
    /// Relayout the widget after changing its constraints or box.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id.handle())
    }

    /// Returns true if `id` refers to a live widget.
    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains(id.handle())
    }

    /// Number of live widgets, layer roots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns true if the tree holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Children of a widget, bottom-most first. Empty for stale ids.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.get(id).map(Widget::children).unwrap_or(&[])
    }

    /// Parent of a widget.
    #[must_use]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.get(id).and_then(Widget::parent)
    }

    /// First widget with the given name, in creation-slot order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<WidgetId> {
        self.widgets
            .iter()
            .find(|(_, w)| w.name() == name)
            .map(|(handle, _)| WidgetId::from_handle(handle))
    }

    /// Current bounds in screen space: the sum of positions up the parent
    /// chain.
    #[must_use]
    pub fn absolute_bounds(&self, id: WidgetId) -> Option<Rect> {
        let widget = self.get(id)?;
        let mut bounds = widget.bounds();
        let mut cursor = widget.parent();
        while let Some(parent) = cursor {
            let node = self.get(parent)?;
            bounds = bounds.translate(node.bounds().x, node.bounds().y);
            cursor = node.parent();
        }
        Some(bounds)
    }

    /// The window size aspect constraints read.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Records a new window size and lays out every layer.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        tracing::debug!(width, height, layers = self.layers.len(), "relayout on resize");
        for layer in self.layers.clone() {
            self.relayout(layer);
        }
    }

    /// Lays out a widget against its parent's box, then its subtree.
    ///
    /// Detached widgets are laid out against [`Rect::SCREEN`].
    pub fn relayout(&mut self, id: WidgetId) {
        let parent_box = self
            .parent(id)
            .and_then(|p| self.get(p))
            .map_or(Rect::SCREEN, Widget::original_bounds);
        self.layout_subtree(id, parent_box);
    }

    fn layout_subtree(&mut self, id: WidgetId, parent_box: Rect) {
        let viewport = self.viewport;
        let Some(widget) = self.widgets.get_mut(id.handle()) else {
            return;
        };
        widget.on_parent_change(parent_box, &viewport);
        let own_box = widget.original_bounds();
        let children = widget.children().to_vec();
        for child in children {
            self.layout_subtree(child, own_box);
        }
    }

    /// Advances every widget's animator by `delta` seconds.
    pub fn update(&mut self, delta: f32) {
        for (_, widget) in self.widgets.iter_mut() {
            widget.update(delta);
        }
    }

    /// Routes one input event. Returns the widget that absorbed it.
    ///
    /// Presses and releases first replay a move to their position so hover
    /// state matches the press point. A left press makes the absorbing
    /// widget active and every other widget inactive; a release goes to
    /// whichever widget the press started on.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<WidgetId> {
        match event {
            InputEvent::MouseMove { x, y } => self.route_move(x, y),
            InputEvent::MousePress { button, x, y } => {
                self.route_move(x, y);
                if button != MouseButton::Left {
                    return None;
                }
                let hit = self.route(&mut |widget: &mut Widget, abs: Rect, sender: &EventSender| {
                    widget.do_mouse_press(abs, x, sender)
                });
                for (handle, widget) in self.widgets.iter_mut() {
                    if Some(WidgetId::from_handle(handle)) != hit {
                        widget.do_inactivate(&self.sender);
                    }
                }
                hit
            }
            InputEvent::MouseRelease { button, x, y } => {
                self.route_move(x, y);
                if button != MouseButton::Left {
                    return None;
                }
                let mut released = None;
                for (handle, widget) in self.widgets.iter_mut() {
                    if widget.do_mouse_release(&self.sender) {
                        released.get_or_insert(WidgetId::from_handle(handle));
                    }
                }
                released
            }
            InputEvent::MouseScroll { dy, .. } => {
                self.route(&mut |widget: &mut Widget, _: Rect, sender: &EventSender| {
                    widget.do_mouse_scroll(dy, sender)
                })
            }
            InputEvent::KeyPress { key, text } | InputEvent::KeyRepeat { key, text } => {
                self.route(&mut |widget: &mut Widget, _: Rect, sender: &EventSender| {
                    widget.do_key_press(key, text, sender)
                })
            }
            InputEvent::KeyRelease { key } => {
                self.route(&mut |widget: &mut Widget, _: Rect, _: &EventSender| {
                    widget.do_key_release(key)
                })
            }
        }
    }

    /// Hover pass. Every visible widget sees the move so exits fire even
    /// under an absorber; a widget is occluded once something above it
    /// absorbed, but never by its own children.
    fn route_move(&mut self, x: f32, y: f32) -> Option<WidgetId> {
        let mut absorber = None;
        for layer in self.layers.clone().into_iter().rev() {
            self.move_subtree(layer, (0.0, 0.0), x, y, false, &mut absorber);
        }
        absorber
    }

    fn move_subtree(
        &mut self,
        id: WidgetId,
        origin: (f32, f32),
        x: f32,
        y: f32,
        blocked: bool,
        absorber: &mut Option<WidgetId>,
    ) {
        let Some(widget) = self.widgets.get(id.handle()) else {
            return;
        };
        if !widget.is_visible() {
            self.exit_subtree(id);
            return;
        }
        let abs = widget.bounds().translate(origin.0, origin.1);
        let blocked =
            blocked || !widget.is_interactive() || widget.animator().ignores_mouse_input();
        let occluded = blocked || absorber.is_some();
        let children = widget.children().to_vec();

        for &child in children.iter().rev() {
            self.move_subtree(child, (abs.x, abs.y), x, y, blocked, absorber);
        }

        if let Some(widget) = self.widgets.get_mut(id.handle()) {
            if widget.do_mouse_move(abs, x, y, occluded, &self.sender) && absorber.is_none() {
                *absorber = Some(id);
            }
        }
    }

    /// Fires exits on every hovered widget under an invisible `id`, so
    /// nothing inside it keeps a stale hover once it is shown again.
    fn exit_subtree(&mut self, id: WidgetId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(widget) = self.widgets.get_mut(next.handle()) {
                if widget.is_cursor_over() {
                    widget.do_mouse_exit();
                }
                stack.extend_from_slice(widget.children());
            }
        }
    }

    /// First-absorber pass, topmost layer and topmost child first.
    fn route<F>(&mut self, handler: &mut F) -> Option<WidgetId>
    where
        F: FnMut(&mut Widget, Rect, &EventSender) -> bool,
    {
        for layer in self.layers.clone().into_iter().rev() {
            if let Some(hit) = self.route_subtree(layer, (0.0, 0.0), handler) {
                return Some(hit);
            }
        }
        None
    }

    fn route_subtree<F>(&mut self, id: WidgetId, origin: (f32, f32), handler: &mut F) -> Option<WidgetId>
    where
        F: FnMut(&mut Widget, Rect, &EventSender) -> bool,
    {
        let widget = self.widgets.get(id.handle())?;
        if !widget.is_visible()
            || !widget.is_interactive()
            || widget.animator().ignores_mouse_input()
        {
            return None;
        }
        let abs = widget.bounds().translate(origin.0, origin.1);
        let children = widget.children().to_vec();

        for &child in children.iter().rev() {
            if let Some(hit) = self.route_subtree(child, (abs.x, abs.y), handler) {
                return Some(hit);
            }
        }

        let widget = self.widgets.get_mut(id.handle())?;
        handler(widget, abs, &self.sender).then_some(id)
    }

    /// Shows a widget.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn show(&mut self, id: WidgetId) -> UiResult<()> {
        self.require_mut(id)?.show();
        Ok(())
    }

    /// Hides a widget, after its hide animation if it has one.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn hide(&mut self, id: WidgetId) -> UiResult<()> {
        self.require_mut(id)?.hide();
        Ok(())
    }

    /// Hides a showing widget or shows a hidden or hiding one.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn toggle_visibility(&mut self, id: WidgetId) -> UiResult<()> {
        let widget = self.require_mut(id)?;
        if widget.is_visible() && !widget.is_hidden() {
            widget.hide();
        } else {
            widget.show();
        }
        Ok(())
    }

    /// Emits draw commands for every visible layer, bottom-most first.
    pub fn render(&self, renderer: &mut UiRenderer) {
        for &layer in &self.layers {
            renderer.render_widget(self, layer);
        }
    }

    /// The notification hub widgets emit into.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// A sender for emitting into this tree's dispatcher.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    fn require(&self, id: WidgetId) -> UiResult<&Widget> {
        self.get(id).ok_or(UiError::StaleWidget(id))
    }

    fn require_mut(&mut self, id: WidgetId) -> UiResult<&mut Widget> {
        self.get_mut(id).ok_or(UiError::StaleWidget(id))
    }

    fn is_ancestor_or_self(&self, candidate: WidgetId, of: WidgetId) -> bool {
        let mut cursor = Some(of);
        while let Some(id) = cursor {
            if id == candidate {
                return true;
            }
            cursor = self.parent(id);
        }
        false
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::UiEvent;
    use crate::layout::{Constraint, ConstraintSet};

    fn centered_half() -> ConstraintSet {
        ConstraintSet::new()
            .with(Constraint::fill_horizontal(0.5))
            .with(Constraint::fill_vertical(0.5))
            .with(Constraint::CenterHorizontal)
            .with(Constraint::CenterVertical)
    }

    fn button(tree: &mut WidgetTree, parent: WidgetId, bounds: Rect) -> WidgetId {
        let id = tree.insert(Widget::new("button", WidgetKind::Button).with_bounds(bounds));
        tree.attach(parent, id).unwrap();
        id
    }

    #[test]
    fn test_tree_hierarchy() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let a = tree.create("a", WidgetKind::Container);
        let b = tree.create("b", WidgetKind::Button);
        tree.attach(root, a).unwrap();
        tree.attach(a, b).unwrap();

        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.layers(), &[root]);
        assert_eq!(tree.find_by_name("b"), Some(b));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_attach_rejects_misuse() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let other = tree.add_layer("overlay");
        let a = tree.create("a", WidgetKind::Container);
        let b = tree.create("b", WidgetKind::Container);
        tree.attach(root, a).unwrap();
        tree.attach(a, b).unwrap();

        assert!(matches!(tree.attach(other, a), Err(UiError::AlreadyAttached { .. })));
        assert!(matches!(tree.attach(a, other), Err(UiError::LayerRoot(_))));

        tree.detach(a).unwrap();
        assert!(matches!(tree.attach(b, a), Err(UiError::Cycle { .. })));
        assert!(matches!(tree.attach(a, a), Err(UiError::Cycle { .. })));
    }

    #[test]
    fn test_remove_subtree_invalidates_ids() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let a = tree.create("a", WidgetKind::Container);
        let b = tree.create("b", WidgetKind::Button);
        tree.attach(root, a).unwrap();
        tree.attach(a, b).unwrap();

        assert_eq!(tree.remove(a).unwrap(), 2);
        assert!(!tree.contains(b));
        assert!(tree.children(root).is_empty());
        assert!(matches!(tree.remove(a), Err(UiError::StaleWidget(_))));

        let c = tree.create("c", WidgetKind::Button);
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert!(tree.get(a).is_none());
    }

    #[test]
    fn test_layout_is_parent_relative() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let panel = tree.insert(Widget::new("panel", WidgetKind::Container).with_constraints(centered_half()));
        tree.attach(root, panel).unwrap();

        let panel_widget = tree.get(panel).unwrap();
        assert_eq!(panel_widget.bounds(), Rect::new(0.5, 0.5, 1.0, 1.0));
        assert_eq!(panel_widget.original_bounds(), panel_widget.bounds());
        assert_eq!(tree.absolute_bounds(panel), Some(Rect::new(-0.5, -0.5, 1.0, 1.0)));

        let inner = tree.insert(Widget::new("inner", WidgetKind::Button).with_constraints(centered_half()));
        tree.attach(panel, inner).unwrap();
        assert_eq!(tree.get(inner).unwrap().bounds(), Rect::new(0.25, 0.25, 0.5, 0.5));
        assert_eq!(tree.absolute_bounds(inner), Some(Rect::new(-0.25, -0.25, 0.5, 0.5)));
    }

    #[test]
    fn test_resize_updates_aspect_constraints() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let square = tree.insert(
            Widget::new("square", WidgetKind::Container)
                .with_bounds(Rect::new(0.0, 0.0, 0.5, 0.0))
                .with_constraints(ConstraintSet::new().with(Constraint::VerticalAspect { modifier: 1.0 })),
        );
        tree.attach(root, square).unwrap();

        tree.resize(1000.0, 500.0);
        assert_eq!(tree.get(square).unwrap().bounds().height, 1.0);
        tree.resize(500.0, 500.0);
        assert_eq!(tree.get(square).unwrap().bounds().height, 0.5);
    }

    #[test]
    fn test_press_absorbed_by_topmost_child() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let bottom = button(&mut tree, root, Rect::new(0.5, 0.5, 1.0, 1.0));
        let top = button(&mut tree, root, Rect::new(0.5, 0.5, 1.0, 1.0));

        let hit = tree.handle_input(InputEvent::MousePress {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
        });
        assert_eq!(hit, Some(top));
        assert!(tree.get(top).unwrap().is_active());
        assert!(!tree.get(bottom).unwrap().is_active());
        assert!(!tree.get(bottom).unwrap().is_cursor_over());
    }

    #[test]
    fn test_containers_pass_input_through() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let target = button(&mut tree, root, Rect::new(0.0, 0.0, 2.0, 2.0));
        let overlay = tree.insert(Widget::new("overlay", WidgetKind::Container).with_bounds(Rect::SCREEN));
        tree.attach(root, overlay).unwrap();

        assert_eq!(tree.handle_input(InputEvent::MouseMove { x: 0.0, y: 0.0 }), Some(target));
        assert!(tree.get(overlay).unwrap().is_cursor_over());
    }

    #[test]
    fn test_hover_exits_when_covered() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let bottom = button(&mut tree, root, Rect::new(0.0, 0.0, 1.0, 1.0));
        tree.handle_input(InputEvent::MouseMove { x: -0.5, y: -0.5 });
        assert!(tree.get(bottom).unwrap().is_cursor_over());

        let overlay = tree.add_layer("overlay");
        let cover = button(&mut tree, overlay, Rect::new(0.0, 0.0, 1.0, 1.0));
        tree.handle_input(InputEvent::MouseMove { x: -0.5, y: -0.5 });
        assert!(tree.get(cover).unwrap().is_cursor_over());
        assert!(!tree.get(bottom).unwrap().is_cursor_over());
    }

    #[test]
    fn test_click_cycle_toggles_checkable() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let check = tree.insert(
            Widget::new("check", WidgetKind::Button)
                .with_bounds(Rect::new(0.0, 0.0, 1.0, 1.0))
                .with_checkable(true),
        );
        tree.attach(root, check).unwrap();

        let press = InputEvent::MousePress { button: MouseButton::Left, x: -0.5, y: -0.5 };
        let release = InputEvent::MouseRelease { button: MouseButton::Left, x: -0.5, y: -0.5 };
        tree.handle_input(press);
        assert_eq!(tree.handle_input(release), Some(check));
        assert!(tree.get(check).unwrap().is_checked());

        let events = tree.dispatcher().drain();
        assert_eq!(
            events,
            vec![
                UiEvent::WidgetPress(check),
                UiEvent::WidgetActive(check),
                UiEvent::WidgetRelease(check),
            ]
        );
    }

    #[test]
    fn test_release_outside_does_not_toggle() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let check = tree.insert(
            Widget::new("check", WidgetKind::Button)
                .with_bounds(Rect::new(0.0, 0.0, 0.5, 0.5))
                .with_checkable(true),
        );
        tree.attach(root, check).unwrap();

        tree.handle_input(InputEvent::MousePress { button: MouseButton::Left, x: -0.9, y: -0.9 });
        tree.handle_input(InputEvent::MouseRelease { button: MouseButton::Left, x: 0.9, y: 0.9 });
        assert!(!tree.get(check).unwrap().is_checked());
        assert_eq!(tree.get(check).unwrap().state(), crate::widget::VisualState::Normal);
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let target = button(&mut tree, root, Rect::new(0.0, 0.0, 2.0, 2.0));
        tree.hide(target).unwrap();

        assert!(!tree.get(target).unwrap().is_visible());
        assert_eq!(tree.handle_input(InputEvent::MouseMove { x: 0.0, y: 0.0 }), None);

        tree.toggle_visibility(target).unwrap();
        assert_eq!(tree.handle_input(InputEvent::MouseMove { x: 0.0, y: 0.0 }), Some(target));
    }

    #[test]
    fn test_hiding_parent_clears_child_hover() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let panel = tree.insert(
            Widget::new("panel", WidgetKind::Container).with_bounds(Rect::new(0.0, 0.0, 1.0, 1.0)),
        );
        tree.attach(root, panel).unwrap();
        let slider = tree.insert(
            Widget::new("slider", WidgetKind::slider(0.5)).with_bounds(Rect::new(0.0, 0.0, 1.0, 1.0)),
        );
        tree.attach(panel, slider).unwrap();

        tree.handle_input(InputEvent::MouseMove { x: -0.5, y: -0.5 });
        assert!(tree.get(slider).unwrap().is_cursor_over());

        tree.hide(panel).unwrap();
        tree.handle_input(InputEvent::MouseMove { x: 0.9, y: 0.9 });
        assert!(!tree.get(slider).unwrap().is_cursor_over());

        tree.show(panel).unwrap();
        assert_eq!(tree.handle_input(InputEvent::MouseScroll { dx: 0.0, dy: 1.0 }), None);
        assert_eq!(tree.get(slider).unwrap().value(), Some(0.5));
    }
}
