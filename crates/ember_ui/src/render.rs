//! UI rendering contract.
//!
//! The tree does not draw. It walks visible widgets and records
//! [`RenderCommand`]s: a quad per drawable widget in its parent's space,
//! and a translation by the widget's position around its children. A
//! backend either replays the commands with its own transform stack or
//! takes the flattened [`UiVertex`] buffer.

use crate::layout::Rect;
use crate::widget::{VisualState, WidgetId, WidgetKind, WidgetTree};

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Translate everything until the matching pop.
    PushTransform {
        /// X offset.
        x: f32,
        /// Y offset.
        y: f32,
    },
    /// A widget's box, relative to the current transform.
    Quad {
        /// The widget drawn.
        widget: WidgetId,
        /// Bounds in the current transform's space.
        bounds: Rect,
        /// Opacity.
        alpha: f32,
        /// Interaction state, for backends that tint.
        state: VisualState,
    },
    /// Undo the last push.
    PopTransform,
}

/// Collects the commands of one frame.
pub struct UiRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Accumulated translations.
    transform_stack: Vec<(f32, f32)>,
}

impl UiRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            transform_stack: Vec::with_capacity(16),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
    }

    /// Adds a quad in the current transform's space.
    pub fn push_quad(&mut self, widget: WidgetId, bounds: Rect, alpha: f32, state: VisualState) {
        self.commands.push(RenderCommand::Quad {
            widget,
            bounds,
            alpha,
            state,
        });
    }

    /// Composes a translation onto the current transform.
    pub fn push_transform(&mut self, x: f32, y: f32) {
        let (ox, oy) = self.current_offset();
        self.transform_stack.push((ox + x, oy + y));
        self.commands.push(RenderCommand::PushTransform { x, y });
    }

    /// Pops the current transform.
    pub fn pop_transform(&mut self) {
        self.transform_stack.pop();
        self.commands.push(RenderCommand::PopTransform);
    }

    /// The accumulated translation.
    #[must_use]
    pub fn current_offset(&self) -> (f32, f32) {
        self.transform_stack.last().copied().unwrap_or((0.0, 0.0))
    }

    /// Records a widget and, if it is visible, its subtree.
    ///
    /// Containers only contribute their transform.
    pub fn render_widget(&mut self, tree: &WidgetTree, id: WidgetId) {
        let Some(widget) = tree.get(id) else {
            return;
        };
        if !widget.is_visible() {
            return;
        }
        let bounds = widget.bounds();
        if !matches!(widget.kind(), WidgetKind::Container) {
            self.push_quad(id, bounds, widget.alpha(), widget.state());
        }
        if widget.children().is_empty() {
            return;
        }
        self.push_transform(bounds.x, bounds.y);
        for &child in widget.children() {
            self.render_widget(tree, child);
        }
        self.pop_transform();
    }

    /// The commands recorded this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Flattens the frame's quads into screen-space triangles, six
    /// vertices per quad.
    #[must_use]
    pub fn vertices(&self) -> Vec<UiVertex> {
        let mut stack: Vec<(f32, f32)> = Vec::with_capacity(self.transform_stack.capacity());
        let mut out = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            let (ox, oy) = stack.last().copied().unwrap_or((0.0, 0.0));
            match *command {
                RenderCommand::PushTransform { x, y } => stack.push((ox + x, oy + y)),
                RenderCommand::PopTransform => {
                    stack.pop();
                }
                RenderCommand::Quad { bounds, alpha, .. } => {
                    let b = bounds.translate(ox, oy);
                    let color = [1.0, 1.0, 1.0, alpha];
                    let bl = UiVertex::new(b.x, b.y, 0.0, 1.0, color);
                    let br = UiVertex::new(b.right(), b.y, 1.0, 1.0, color);
                    let tr = UiVertex::new(b.right(), b.top(), 1.0, 0.0, color);
                    let tl = UiVertex::new(b.x, b.top(), 0.0, 0.0, color);
                    out.extend_from_slice(&[bl, br, tr, bl, tr, tl]);
                }
            }
        }
        out
    }
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UiVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;

    #[test]
    fn test_transform_stack() {
        let mut renderer = UiRenderer::new();
        renderer.begin_frame();
        renderer.push_transform(1.0, 2.0);
        renderer.push_transform(0.5, 0.5);
        assert_eq!(renderer.current_offset(), (1.5, 2.5));
        renderer.pop_transform();
        renderer.pop_transform();
        assert_eq!(renderer.current_offset(), (0.0, 0.0));
        assert_eq!(renderer.command_count(), 4);
    }

    #[test]
    fn test_invisible_subtree_emits_nothing() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let panel = tree.insert(Widget::new("panel", WidgetKind::Container).with_bounds(Rect::new(0.5, 0.5, 1.0, 1.0)));
        tree.attach(root, panel).unwrap();
        let button = tree.insert(Widget::new("ok", WidgetKind::Button).with_bounds(Rect::new(0.25, 0.25, 0.5, 0.5)));
        tree.attach(panel, button).unwrap();

        let mut renderer = UiRenderer::new();
        tree.render(&mut renderer);
        assert_eq!(
            renderer.commands(),
            &[
                RenderCommand::PushTransform { x: -1.0, y: -1.0 },
                RenderCommand::PushTransform { x: 0.5, y: 0.5 },
                RenderCommand::Quad {
                    widget: button,
                    bounds: Rect::new(0.25, 0.25, 0.5, 0.5),
                    alpha: 1.0,
                    state: VisualState::Normal,
                },
                RenderCommand::PopTransform,
                RenderCommand::PopTransform,
            ]
        );

        tree.hide(panel).unwrap();
        renderer.begin_frame();
        tree.render(&mut renderer);
        assert_eq!(renderer.command_count(), 2);
    }

    #[test]
    fn test_vertices_are_screen_space() {
        let mut renderer = UiRenderer::new();
        renderer.push_transform(-1.0, -1.0);
        renderer.push_quad(WidgetId::NULL, Rect::new(0.5, 0.5, 1.0, 1.0), 0.5, VisualState::Normal);
        renderer.pop_transform();

        let vertices = renderer.vertices();
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [-0.5, -0.5]);
        assert_eq!(vertices[2].position, [0.5, 0.5]);
        assert_eq!(vertices[0].color[3], 0.5);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 6 * std::mem::size_of::<UiVertex>());
    }
}
