//! Input abstraction layer.
//!
//! Normalizes pointer and keyboard events from the host toolkit into a
//! unified `InputEvent` enum consumed by tools. Coordinates are already in
//! diagram space.

/// Modifier keys held while an event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        alt: false,
        ctrl: false,
        meta: false,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f32, y: f32, modifiers: Modifiers },

    PointerMove { x: f32, y: f32, modifiers: Modifiers },

    PointerUp { x: f32, y: f32 },

    /// Key press, named the way the DOM names keys (`"Escape"`, `"a"`).
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn down(x: f32, y: f32) -> Self {
        InputEvent::PointerDown {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn drag_to(x: f32, y: f32) -> Self {
        InputEvent::PointerMove {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        InputEvent::PointerUp { x, y }
    }

    pub fn key(key: &str) -> Self {
        InputEvent::Key {
            key: key.to_string(),
            modifiers: Modifiers::NONE,
        }
    }
}
