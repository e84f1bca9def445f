use crate::coords::{round_half_up, Vec2, Viewport};

/// Maps device coordinates onto a surface's bitmap.
///
/// A surface may be presented at a size different from its bitmap (stretched
/// by the host). A device point is first made relative to the presented
/// origin, then scaled per axis by `bitmap / displayed` and rounded to the
/// nearest pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMapper {
    /// Device position of the surface's top-left corner.
    pub origin: Vec2,
    /// Size the surface is presented at, in device units.
    pub displayed: Viewport,
    /// Bitmap size of the surface, in pixels.
    pub bitmap: Viewport,
}

impl PointerMapper {
    pub fn new(origin: Vec2, displayed: Viewport, bitmap: Viewport) -> Self {
        Self { origin, displayed, bitmap }
    }

    /// Mapper for a surface presented 1:1 at the device origin.
    pub fn identity(bitmap: Viewport) -> Self {
        Self::new(Vec2::zero(), bitmap, bitmap)
    }

    /// Per-axis scale from device units to bitmap pixels. An axis with a
    /// degenerate presented size maps 1:1.
    pub fn scale(&self) -> Vec2 {
        let axis = |bitmap: f32, displayed: f32| {
            if displayed > 0.0 && displayed.is_finite() { bitmap / displayed } else { 1.0 }
        };
        Vec2::new(
            axis(self.bitmap.width, self.displayed.width),
            axis(self.bitmap.height, self.displayed.height),
        )
    }

    pub fn to_surface(&self, device: Vec2) -> Vec2 {
        let scale = self.scale();
        let rel = device - self.origin;
        Vec2::new(round_half_up(rel.x * scale.x), round_half_up(rel.y * scale.y))
    }
}
