//! Coordinate and geometry types shared by the scene and the drawing surfaces.
//!
//! Canonical space:
//! - surface (bitmap) pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Angles are radians; positive angles turn from +X towards +Y, which is
//! clockwise on screen.

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;

/// Rounds to the nearest integer, with halves rounded towards +infinity.
///
/// `f32::round` rounds halves away from zero, which would move negative
/// coordinates one pixel further than positive ones.
#[inline]
pub fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}
