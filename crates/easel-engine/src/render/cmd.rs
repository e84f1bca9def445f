use crate::coords::{Rect, Vec2};
use crate::paint::{Color, ImageHandle};

/// A single drawing-surface call, as recorded by [`DrawList`](super::DrawList).
///
/// Paint commands carry local coordinates; the transform in effect is stored
/// next to them in the owning [`DrawItem`](super::DrawItem).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Rect),
    Rect { rect: Rect, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Image { rect: Rect, image: ImageHandle },
    Translate(Vec2),
    Rotate(f32),
    GlobalAlpha(f32),
}

impl DrawCmd {
    /// True for commands that put pixels on the surface (including clears).
    #[inline]
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCmd::Clear(_) | DrawCmd::Rect { .. } | DrawCmd::Circle { .. } | DrawCmd::Image { .. }
        )
    }
}
