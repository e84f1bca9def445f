use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, TouchPhase, WindowEvent};
use winit::keyboard::ModifiersState;

use crate::coords::Vec2;
use crate::input::{Modifiers, MouseButton, PointerEvent};

/// Turns winit window events into engine pointer events.
///
/// Positions are physical pixels relative to the window's client area, so a
/// [`PointerMapper`](crate::input::PointerMapper) with a zero origin, the
/// window's inner size as `displayed` and the surface size as `bitmap` maps
/// them onto the surface.
///
/// A click is reported when a mouse button is released; a touch when it starts.
#[derive(Debug, Default)]
pub struct PointerTranslator {
    cursor: Option<PhysicalPosition<f64>>,
    modifiers: Modifiers,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one window event. Returns a pointer event when `event` completes one.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m.state());
                None
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(*position);
                None
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }

            WindowEvent::MouseInput { state: ElementState::Released, button, .. } => {
                // winit 0.30 does not expose a cursor query; use the tracked position.
                let pos = self.cursor?;
                Some(
                    PointerEvent::click(map_mouse_button(*button), to_vec2(pos))
                        .with_modifiers(self.modifiers),
                )
            }

            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => Some(
                PointerEvent::touch(touch.id, to_vec2(touch.location)).with_modifiers(self.modifiers),
            ),

            _ => None,
        }
    }
}

fn to_vec2(pos: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(pos.x as f32, pos.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}
