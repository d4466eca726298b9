//! Input events delivered by the platform layer.
//!
//! Positions are normalized device coordinates, the same space layer
//! roots occupy (`[-1, 1]` on both axes, y up).

#![allow(missing_docs)]

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Space bar.
    Space,
    /// Any key producing text; the text travels in the event.
    Character,
    /// Anything else.
    Other(u32),
}

/// A single input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseMove {
        x: f32,
        y: f32,
    },
    MousePress {
        button: MouseButton,
        x: f32,
        y: f32,
    },
    MouseRelease {
        button: MouseButton,
        x: f32,
        y: f32,
    },
    MouseScroll {
        dx: f32,
        dy: f32,
    },
    KeyPress {
        key: Key,
        text: Option<char>,
    },
    KeyRelease {
        key: Key,
    },
    KeyRepeat {
        key: Key,
        text: Option<char>,
    },
}

impl InputEvent {
    /// Returns the cursor position carried by mouse events.
    #[must_use]
    pub const fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::MouseMove { x, y }
            | Self::MousePress { x, y, .. }
            | Self::MouseRelease { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Returns true for keyboard events.
    #[must_use]
    pub const fn is_keyboard(&self) -> bool {
        matches!(
            self,
            Self::KeyPress { .. } | Self::KeyRelease { .. } | Self::KeyRepeat { .. }
        )
    }
}
