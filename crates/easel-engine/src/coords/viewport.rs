/// Width/height pair in pixels.
///
/// Used both for a surface's bitmap size and for the size a surface is
/// presented at, which may differ when the host scales the surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
