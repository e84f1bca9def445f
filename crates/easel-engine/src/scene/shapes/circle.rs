use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::paint::Fill;
use crate::render::DrawContext;
use crate::scene::{NodeBase, SceneNode, ZIndex};

use super::ShapeRef;

/// Circle node. Its position is the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    base: NodeBase,
    radius: f32,
    fill: Fill,
}

impl Circle {
    /// Creates a circle centered at `(x, y)`. A negative radius is taken by
    /// absolute value.
    pub fn new(x: f32, y: f32, z: impl Into<ZIndex>, radius: f32, fill: impl Into<Fill>) -> Self {
        let radius = radius.abs();
        Self {
            base: NodeBase::new(Vec2::new(x, y), z, radius, radius),
            radius,
            fill: fill.into(),
        }
    }

    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.base.is_visible = visible;
        self
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.base.position
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.abs();
        self.base.width = crate::scene::normalize_extent(self.radius);
        self.base.height = self.base.width;
    }

    #[inline]
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    #[inline]
    pub fn set_fill(&mut self, fill: impl Into<Fill>) {
        self.fill = fill.into();
    }

    /// Top-left corner of the circle's bounding square.
    #[inline]
    pub fn upper_left_corner(&self) -> Vec2 {
        self.base.position - Vec2::new(self.radius, self.radius)
    }

    /// Moves the circle so its bounding square starts at `corner`.
    #[inline]
    pub fn set_upper_left_corner(&mut self, corner: Vec2) {
        self.base.position = corner + Vec2::new(self.radius, self.radius);
    }

    /// Bounding square of the circle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        let d = self.radius * 2.0;
        Rect::from_origin_size(self.upper_left_corner(), Vec2::new(d, d))
    }

    /// Overlap test against another node. Supported partners are circles and
    /// axis-aligned rectangles; anything else is [`SceneError::UnsupportedOperand`].
    pub fn collision(&self, other: &dyn SceneNode) -> Result<bool, SceneError> {
        ShapeRef::Circle(self).collision(other.shape())
    }
}

impl SceneNode for Circle {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        match &self.fill {
            Fill::Color(color) => ctx.fill_circle(self.center(), self.radius, *color),
            Fill::Image(image) => ctx.draw_image(image, self.bounds()),
        }
    }

    fn covers(&self, point: Vec2) -> bool {
        Vec2::between(self.center(), point).magnitude() <= self.radius
    }

    fn shape(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::Circle(self))
    }

    fn mid(&self) -> Vec2 {
        self.center()
    }

    fn set_mid(&mut self, mid: Vec2) {
        self.base.position = mid;
    }
}
