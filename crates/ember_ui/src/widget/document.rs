//! Serializable snapshots of widget subtrees.
//!
//! A [`WidgetDocument`] carries everything needed to rebuild a subtree:
//! identity, type data, flags, geometry, constraints and the animator's
//! configuration. Playback state and ids are not stored; an imported
//! subtree gets fresh ids and idle animators.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Widget, WidgetId, WidgetKind, WidgetTree};
use crate::animation::{AnimationKind, Animator, Appearance, TransitionGroup};
use crate::error::{UiError, UiResult};
use crate::layout::{ConstraintSet, Rect};

/// Snapshot of one widget and its descendants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDocument {
    /// Widget name.
    pub name: String,
    /// True for the root of a layer.
    #[serde(default)]
    pub layer: bool,
    /// Drawn and hit-tested.
    #[serde(default = "enabled")]
    pub visible: bool,
    /// Receives input.
    #[serde(default = "enabled")]
    pub interactive: bool,
    /// May be checked.
    #[serde(default)]
    pub checkable: bool,
    /// Is checked.
    #[serde(default)]
    pub checked: bool,
    /// Current opacity.
    #[serde(default = "opaque")]
    pub alpha: f32,
    /// Configured opacity.
    #[serde(default = "opaque")]
    pub original_alpha: f32,
    /// Layout size hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_size: Option<[f32; 2]>,
    /// Type and type-specific data.
    #[serde(default)]
    pub kind: WidgetKind,
    /// Declared box layout starts from.
    #[serde(default)]
    pub base_bounds: Rect,
    /// Current parent-relative bounds.
    #[serde(default)]
    pub bounds: Rect,
    /// Constraint-derived bounds.
    #[serde(default)]
    pub original_bounds: Rect,
    /// Layout constraints.
    #[serde(default)]
    pub constraints: ConstraintSet,
    /// Animator configuration.
    #[serde(default)]
    pub animations: AnimationsDocument,
    /// Children, bottom-most first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetDocument>,
}

const fn enabled() -> bool {
    true
}

const fn opaque() -> f32 {
    1.0
}

/// The eight transition groups of an animator, by request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct AnimationsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_enter: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_exit: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_press: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_release: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate: Option<TransitionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivate: Option<TransitionGroup>,
}

impl AnimationsDocument {
    fn slot(&mut self, kind: AnimationKind) -> &mut Option<TransitionGroup> {
        match kind {
            AnimationKind::MouseEnter => &mut self.mouse_enter,
            AnimationKind::MouseExit => &mut self.mouse_exit,
            AnimationKind::MousePress => &mut self.mouse_press,
            AnimationKind::MouseRelease => &mut self.mouse_release,
            AnimationKind::Show => &mut self.show,
            AnimationKind::Hide => &mut self.hide,
            AnimationKind::Activate => &mut self.activate,
            AnimationKind::Inactivate => &mut self.inactivate,
        }
    }

    /// Captures an animator's configured groups.
    #[must_use]
    pub fn from_animator(animator: &Animator) -> Self {
        let mut doc = Self::default();
        for kind in AnimationKind::ALL {
            if animator.is_configured(kind) {
                *doc.slot(kind) = Some(animator.group(kind).configuration());
            }
        }
        doc
    }

    /// Builds an idle animator from the stored groups.
    #[must_use]
    pub fn to_animator(&self) -> Animator {
        let mut doc = self.clone();
        AnimationKind::ALL
            .into_iter()
            .fold(Animator::new(), |animator, kind| match doc.slot(kind).take() {
                Some(group) => animator.with(kind, group),
                None => animator,
            })
    }
}

impl WidgetDocument {
    /// Parses a document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Parse`] on malformed TOML, unknown widget or
    /// constraint types, or a transition group animating one attribute
    /// twice.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a document file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| UiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the document to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> UiResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Number of widgets in the document.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    fn snapshot(widget: &Widget) -> Self {
        Self {
            name: widget.name().to_owned(),
            layer: widget.is_layer_root(),
            visible: widget.is_visible(),
            interactive: widget.is_interactive(),
            checkable: widget.is_checkable(),
            checked: widget.is_checked(),
            alpha: widget.alpha(),
            original_alpha: widget.original_alpha(),
            strict_size: widget.strict_size(),
            kind: widget.kind().clone(),
            base_bounds: widget.base_bounds(),
            bounds: widget.bounds(),
            original_bounds: widget.original_bounds(),
            constraints: widget.constraints().clone(),
            animations: AnimationsDocument::from_animator(widget.animator()),
            children: Vec::new(),
        }
    }

    fn build(&self, nested: bool) -> Widget {
        let mut widget = if self.layer && !nested {
            Widget::layer(self.name.clone())
        } else {
            Widget::new(self.name.clone(), self.kind.clone())
        };
        widget.set_strict_size(self.strict_size);
        widget.restore_appearance(
            self.base_bounds,
            Appearance {
                bounds: self.bounds,
                original_bounds: self.original_bounds,
                alpha: self.alpha,
                original_alpha: self.original_alpha,
            },
        );
        widget.restore_flags(self.visible, self.interactive, self.checkable, self.checked);
        widget
            .with_constraints(self.constraints.clone())
            .with_animator(self.animations.to_animator())
    }
}

impl WidgetTree {
    /// Snapshots a widget and its subtree.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn export(&self, id: WidgetId) -> UiResult<WidgetDocument> {
        let widget = self.get(id).ok_or(UiError::StaleWidget(id))?;
        let mut doc = WidgetDocument::snapshot(widget);
        doc.children = widget
            .children()
            .iter()
            .map(|&child| self.export(child))
            .collect::<UiResult<_>>()?;
        Ok(doc)
    }

    /// Rebuilds a document's subtree with fresh ids, exactly as stored.
    ///
    /// A layer document becomes a new topmost layer and takes no parent.
    /// Any other document is attached as the topmost child of `parent`, or
    /// left detached when `parent` is `None`. The layer flag of nested
    /// documents is ignored. No layout pass runs; call
    /// [`relayout`](Self::relayout) to fit the subtree to a new parent.
    ///
    /// # Errors
    ///
    /// Fails if `parent` is stale, or if a layer document is given a
    /// parent.
    pub fn import(&mut self, doc: &WidgetDocument, parent: Option<WidgetId>) -> UiResult<WidgetId> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(UiError::StaleWidget(parent));
            }
        }
        let root = self.import_node(doc, false)?;
        match (doc.layer, parent) {
            (true, Some(_)) => {
                self.remove(root)?;
                return Err(UiError::LayerRoot(root));
            }
            (true, None) => self.push_layer(root),
            (false, Some(parent)) => self.link(parent, root)?,
            (false, None) => {}
        }
        tracing::debug!(%root, widgets = doc.count(), "document imported");
        Ok(root)
    }

    fn import_node(&mut self, doc: &WidgetDocument, nested: bool) -> UiResult<WidgetId> {
        let id = self.insert(doc.build(nested));
        for child in &doc.children {
            let child_id = self.import_node(child, true)?;
            self.link(id, child_id)?;
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Transition, Tween};
    use crate::layout::Constraint;

    fn fade_group() -> TransitionGroup {
        TransitionGroup::new()
            .with(Transition::new(Tween::Fade { from: 0.0, to: 1.0 }, 0.25))
            .unwrap()
    }

    #[test]
    fn test_nested_layer_document_parses() {
        let text = r#"
            name = "hud"
            layer = true

            [[children]]
            name = "volume"
            bounds = { x = 0.0, y = 0.0, width = 1.0, height = 0.2 }

            [children.kind]
            type = "slider"
            value = 0.5
            step = 0.1

            [[children.constraints.primary]]
            type = "fill_horizontal"
            ratio = 0.5

            [[children.constraints.primary]]
            type = "center_horizontal"

            [children.animations.mouse_enter]
            delay = 0.1

            [[children.animations.mouse_enter.transitions]]
            duration = 0.2
            easing = "linear"
            tween = { type = "fade", from = 1.0, to = 0.5 }
        "#;
        let doc = WidgetDocument::from_toml_str(text).unwrap();
        assert!(doc.layer);
        assert_eq!(doc.count(), 2);
        let slider = &doc.children[0];
        assert!(slider.visible);
        assert_eq!(slider.kind, WidgetKind::Slider { value: 0.5, step: 0.1 });
        assert_eq!(slider.constraints.len(), 2);
        let animator = slider.animations.to_animator();
        assert!(animator.is_configured(AnimationKind::MouseEnter));
        assert!(!animator.is_configured(AnimationKind::Show));
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let text = r#"
            name = "bad"

            [[animations.show.transitions]]
            duration = 0.2
            tween = { type = "fade", from = 0.0, to = 1.0 }

            [[animations.show.transitions]]
            duration = 0.4
            tween = { type = "fade", from = 0.5, to = 1.0 }
        "#;
        assert!(matches!(WidgetDocument::from_toml_str(text), Err(UiError::Parse(_))));
    }

    #[test]
    fn test_export_skips_playback_state() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let panel = tree.insert(
            Widget::new("panel", WidgetKind::Container)
                .with_animator(Animator::new().with(AnimationKind::Show, fade_group())),
        );
        tree.attach(root, panel).unwrap();
        tree.get_mut(panel).unwrap().animator_mut().start(AnimationKind::Show, 0.0);
        tree.update(0.1);

        let doc = tree.export(panel).unwrap();
        assert_eq!(doc.animations.show, Some(fade_group()));
    }

    #[test]
    fn test_import_restores_subtree() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let panel = tree.insert(
            Widget::new("panel", WidgetKind::Container).with_constraints(
                ConstraintSet::new().with(Constraint::fill_horizontal(0.5)),
            ),
        );
        tree.attach(root, panel).unwrap();
        let field = tree.insert(Widget::new("field", WidgetKind::text_field()).with_checkable(true));
        tree.attach(panel, field).unwrap();
        tree.get_mut(field).unwrap().set_checked(true);

        let doc = tree.export(root).unwrap();
        let copy = tree.import(&doc, None).unwrap();

        assert_eq!(tree.layers(), &[root, copy]);
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.export(copy).unwrap(), doc);

        let copied_field = tree.children(tree.children(copy)[0])[0];
        assert!(tree.get(copied_field).unwrap().is_checked());
        assert_eq!(tree.parent(copied_field), Some(tree.children(copy)[0]));
    }

    #[test]
    fn test_layer_document_needs_no_parent() {
        let mut tree = WidgetTree::default();
        let root = tree.add_layer("hud");
        let doc = tree.export(root).unwrap();
        assert!(matches!(tree.import(&doc, Some(root)), Err(UiError::LayerRoot(_))));
        assert_eq!(tree.len(), 1);
    }
}
