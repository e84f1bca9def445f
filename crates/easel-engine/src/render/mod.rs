//! Drawing surfaces.
//!
//! Scene nodes paint through the [`DrawContext`] trait and never see a concrete
//! backend. Two surfaces ship with the engine:
//! - [`DrawList`] records commands (with the transform/alpha in effect) for tests
//!   and for hosts that replay them on their own backend
//! - [`Pixmap`] rasterizes on the CPU into an RGBA bitmap
//!
//! Convention:
//! - coordinates are surface pixels (top-left origin, +Y down)
//! - `translate`/`rotate` compose onto the current transform and must be undone
//!   by the caller in matched pairs

mod cmd;
mod list;
mod pixmap;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use pixmap::Pixmap;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Fill, ImageHandle};

/// The drawing surface contract consumed by scene nodes.
pub trait DrawContext {
    /// Bitmap width in pixels.
    fn width(&self) -> u32;

    /// Bitmap height in pixels.
    fn height(&self) -> u32;

    /// Resets the pixels under `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draws `image` stretched over `rect`.
    fn draw_image(&mut self, image: &ImageHandle, rect: Rect);

    fn translate(&mut self, offset: Vec2);

    /// Rotates the coordinate frame by `angle` radians about the current origin.
    fn rotate(&mut self, angle: f32);

    fn global_alpha(&self) -> f32;

    /// Opacity multiplier applied to everything drawn afterwards, clamped to `[0, 1]`.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Clears the whole surface.
    fn clear_all(&mut self) {
        let rect = Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32);
        self.clear_rect(rect);
    }

    /// Paints the whole surface with `color`.
    fn fill_all(&mut self, color: Color) {
        let rect = Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32);
        self.fill_rect(rect, color);
    }

    /// Paints `rect` with either fill variant.
    fn paint_rect(&mut self, fill: &Fill, rect: Rect) {
        match fill {
            Fill::Color(color) => self.fill_rect(rect, *color),
            Fill::Image(image) => self.draw_image(image, rect),
        }
    }
}
