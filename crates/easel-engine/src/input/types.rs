use crate::coords::Vec2;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// What produced a pointer event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerKind {
    /// A completed mouse click (button released over the surface).
    Click(MouseButton),
    /// A touch that started on the surface.
    Touch { id: u64 },
}

/// Pointer event as delivered by the host.
///
/// `position` is in device coordinates relative to the surface's presented
/// origin; use a [`PointerMapper`](super::PointerMapper) to bring it into
/// bitmap space before hit-testing. Nodes receive the event unmodified.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn click(button: MouseButton, position: Vec2) -> Self {
        Self { kind: PointerKind::Click(button), position, modifiers: Modifiers::default() }
    }

    pub fn touch(id: u64, position: Vec2) -> Self {
        Self { kind: PointerKind::Touch { id }, position, modifiers: Modifiers::default() }
    }

    #[inline]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
