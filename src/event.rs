// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Unified input events and the shared pointer state. Events delivered
//! by a render adapter (crossterm terminal, headless script) are
//! converted to these types so the canvas loop and scenes never see a
//! backend event directly.

use bitflags::bitflags;

mod orbit;
pub use orbit::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Event {
    /// A single key event with additional pressed modifiers.
    Key(KeyEvent),
    /// A single mouse event with additional pressed modifiers.
    Mouse(MouseEvent),
    /// The host surface changed size (new width and height in cells for
    /// a terminal, pixels otherwise).
    Resize(u16, u16),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent { code, modifiers }
    }
}

/// Represents a key.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Tab,
    Delete,
    Char(char),
    Esc,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct MouseEvent {
    /// The kind of mouse event that was caused.
    pub kind: MouseEventKind,
    /// The column that the event occurred on.
    pub column: u16,
    /// The row that the event occurred on.
    pub row: u16,
    /// The key modifiers active when the event occurred.
    pub modifiers: KeyModifiers,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MouseEventKind {
    /// Pressed mouse button. Contains the button that was pressed.
    Down(MouseButton),
    /// Released mouse button. Contains the button that was released.
    Up(MouseButton),
    /// Moved the mouse cursor while pressing the contained mouse button.
    Drag(MouseButton),
    /// Moved the mouse cursor while not pressing a mouse button.
    Moved,
    /// The pointer left the surface (or the surface lost focus).
    Exited,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

bitflags! {
    /// Represents key modifiers (shift, control, alt).
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const NONE = 0b0000_0000;
    }
}

/// Shared pointer state in grid-cell units, written by the event pump
/// and read by scene functions. Absent is exactly (-1, -1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl Pointer {
    pub const ABSENT: f32 = -1.0;

    pub fn new() -> Pointer {
        Pointer {
            x: Self::ABSENT,
            y: Self::ABSENT,
            pressed: false,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.x < 0.0 || self.y < 0.0
    }

    /// the pointer left the surface
    pub fn clear(&mut self) {
        self.x = Self::ABSENT;
        self.y = Self::ABSENT;
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Pointer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_starts_absent() {
        let p = Pointer::new();
        assert!(p.is_absent());
        assert_eq!(p.x, -1.0);
        assert_eq!(p.y, -1.0);
        assert!(!p.pressed);
    }

    #[test]
    fn pointer_clear_restores_sentinel() {
        let mut p = Pointer::new();
        p.x = 4.5;
        p.y = 2.0;
        assert!(!p.is_absent());
        p.clear();
        assert_eq!((p.x, p.y), (-1.0, -1.0));
    }
}
