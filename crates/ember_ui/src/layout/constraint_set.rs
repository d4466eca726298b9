//! Ordered constraint pipelines.

use serde::{Deserialize, Serialize};

use super::{Constraint, Rect, Viewport};

/// Two ordered constraint pipelines: primary, then post-process.
///
/// Order is significant, each constraint consumes the previous one's
/// output. Callers are responsible for ordering: a `fill_horizontal` must
/// precede the `center_horizontal` that expects the shrunk width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Constraints applied first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    primary: Vec<Constraint>,
    /// Constraints applied to the primary result.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    post: Vec<Constraint>,
}

impl ConstraintSet {
    /// Creates an empty set. Applying it returns the child box unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary: Vec::new(),
            post: Vec::new(),
        }
    }

    /// Appends a primary constraint (builder form).
    #[must_use]
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.primary.push(constraint);
        self
    }

    /// Appends a post-process constraint (builder form).
    #[must_use]
    pub fn with_post(mut self, constraint: Constraint) -> Self {
        self.post.push(constraint);
        self
    }

    /// Appends a primary constraint.
    pub fn push(&mut self, constraint: Constraint) {
        self.primary.push(constraint);
    }

    /// Appends a post-process constraint.
    pub fn push_post(&mut self, constraint: Constraint) {
        self.post.push(constraint);
    }

    /// Removes every constraint from both pipelines.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.post.clear();
    }

    /// Primary constraints in application order.
    #[must_use]
    pub fn primary(&self) -> &[Constraint] {
        &self.primary
    }

    /// Post-process constraints in application order.
    #[must_use]
    pub fn post(&self) -> &[Constraint] {
        &self.post
    }

    /// Total number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len() + self.post.len()
    }

    /// Returns true if neither pipeline holds a constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.post.is_empty()
    }

    /// Folds both pipelines over `child`, primary first.
    #[must_use]
    pub fn apply(&self, parent: Rect, child: Rect, viewport: &Viewport) -> Rect {
        self.primary
            .iter()
            .chain(&self.post)
            .fold(child, |acc, constraint| constraint.apply(parent, acc, viewport))
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self {
            primary: iter.into_iter().collect(),
            post: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_half() -> ConstraintSet {
        ConstraintSet::new()
            .with(Constraint::fill_horizontal(0.5))
            .with(Constraint::fill_vertical(0.5))
            .with(Constraint::CenterHorizontal)
            .with(Constraint::CenterVertical)
    }

    #[test]
    fn test_centered_half_of_screen() {
        let out = centered_half().apply(Rect::SCREEN, Rect::ZERO, &Viewport::default());
        assert_eq!(out, Rect::new(0.5, 0.5, 1.0, 1.0));
    }

    #[test]
    fn test_apply_is_deterministic() {
        let set = centered_half().with_post(Constraint::padding(0.01, 0.02, 0.03, 0.04));
        let viewport = Viewport::default();
        let child = Rect::new(0.3, -0.2, 0.7, 0.1);

        let first = set.apply(Rect::SCREEN, child, &viewport);
        let second = set.apply(Rect::SCREEN, child, &viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_matters() {
        let viewport = Viewport::default();
        let fill_then_center = ConstraintSet::new()
            .with(Constraint::fill_horizontal(0.5))
            .with(Constraint::CenterHorizontal);
        let center_then_fill = ConstraintSet::new()
            .with(Constraint::CenterHorizontal)
            .with(Constraint::fill_horizontal(0.5));

        let a = fill_then_center.apply(Rect::SCREEN, Rect::ZERO, &viewport);
        let b = center_then_fill.apply(Rect::SCREEN, Rect::ZERO, &viewport);
        assert_eq!(a.x, 0.5);
        assert_eq!(b.x, 1.0);
    }

    #[test]
    fn test_post_runs_after_primary() {
        let set = ConstraintSet::new()
            .with_post(Constraint::padding(0.1, 0.1, 0.1, 0.1))
            .with(Constraint::fill_horizontal(1.0));
        let out = set.apply(Rect::SCREEN, Rect::ZERO, &Viewport::default());
        assert!((out.width - 1.8).abs() < 1e-6);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = centered_half();
        let mut copy = original.clone();
        copy.clear();
        copy.push(Constraint::RightAlign);

        assert_eq!(original.len(), 4);
        assert_eq!(copy.primary(), &[Constraint::RightAlign]);
    }
}
