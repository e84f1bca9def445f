use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{Color, ImageHandle};

use super::{DrawCmd, DrawContext};

/// A recorded command plus the surface state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Transform in effect after the command was applied.
    pub transform: Transform,
    /// Global alpha in effect after the command was applied.
    pub alpha: f32,
}

/// Recording drawing surface.
///
/// Does not rasterize. Every call is appended in issue order together with the
/// transform and alpha state, so tests can assert on paint order and on
/// matched transform pairs.
#[derive(Debug, Clone)]
pub struct DrawList {
    items: Vec<DrawItem>,
    width: u32,
    height: u32,
    transform: Transform,
    alpha: f32,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            items: Vec::new(),
            width,
            height,
            transform: Transform::IDENTITY,
            alpha: 1.0,
        }
    }

    /// Drops recorded items. Keeps allocated capacity and the current
    /// transform/alpha state.
    #[inline]
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Returns items in issue order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Iterates the commands that put pixels on the surface.
    pub fn paint_commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd).filter(|cmd| cmd.is_paint())
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            transform: self.transform,
            alpha: self.alpha,
        });
    }
}

impl DrawContext for DrawList {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.push(DrawCmd::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Circle { center, radius, color });
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect) {
        self.push(DrawCmd::Image { rect, image: image.clone() });
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform.translate(offset);
        self.push(DrawCmd::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform.rotate(angle);
        self.push(DrawCmd::Rotate(angle));
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
        self.push(DrawCmd::GlobalAlpha(self.alpha));
    }
}
