use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::paint::Fill;
use crate::render::DrawContext;
use crate::scene::{NodeBase, SceneNode, ZIndex};

use super::ShapeRef;

/// Axis-aligned rectangle node. Its position is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: NodeBase,
    fill: Fill,
}

impl Rectangle {
    pub fn new(
        x: f32,
        y: f32,
        z: impl Into<ZIndex>,
        width: f32,
        height: f32,
        fill: impl Into<Fill>,
    ) -> Self {
        Self {
            base: NodeBase::new(Vec2::new(x, y), z, width, height),
            fill: fill.into(),
        }
    }

    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.base.is_visible = visible;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    #[inline]
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    #[inline]
    pub fn set_fill(&mut self, fill: impl Into<Fill>) {
        self.fill = fill.into();
    }

    /// Overlap test against another node. Supported partners are circles and
    /// axis-aligned rectangles; anything else is [`SceneError::UnsupportedOperand`].
    pub fn collision(&self, other: &dyn SceneNode) -> Result<bool, SceneError> {
        ShapeRef::Rectangle(self).collision(other.shape())
    }
}

impl SceneNode for Rectangle {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.paint_rect(&self.fill, self.bounds());
    }

    fn covers(&self, point: Vec2) -> bool {
        self.bounds().covers(point)
    }

    fn shape(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::Rectangle(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, ImageHandle};
    use crate::render::{DrawCmd, DrawList};
    use crate::scene::shapes::{Circle, RotatedRectangle};

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle::new(x, y, 0, w, h, Color::WHITE)
    }

    #[test]
    fn covers_edges_inclusive() {
        let r = rect(2.0, 3.0, 4.0, 5.0);
        assert!(r.covers(Vec2::new(2.0, 3.0)));
        assert!(r.covers(Vec2::new(6.0, 8.0)));
        assert!(r.covers(Vec2::new(4.0, 8.0)));
        assert!(!r.covers(Vec2::new(6.5, 8.0)));
        assert!(!r.covers(Vec2::new(1.9, 4.0)));
    }

    #[test]
    fn rectangles_overlap_including_touching() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.collision(&rect(10.0, 10.0, 2.0, 2.0)).unwrap());
        assert!(a.collision(&rect(-4.0, 2.0, 4.0, 2.0)).unwrap());
        assert!(!a.collision(&rect(10.5, 0.0, 2.0, 2.0)).unwrap());
        assert!(!a.collision(&rect(0.0, -3.0, 5.0, 2.0)).unwrap());
    }

    #[test]
    fn circle_centered_in_rectangle_collides() {
        let r = Rectangle::new(0.0, 0.0, 1, 10.0, 10.0, Color::WHITE);
        let c = Circle::new(5.0, 5.0, 2, 3.0, Color::BLACK);
        assert!(r.collision(&c).unwrap());
    }

    #[test]
    fn rotated_partner_is_unsupported() {
        let rr = RotatedRectangle::new(0.0, 0.0, 0, 4.0, 4.0, Color::BLACK);
        assert!(matches!(
            rect(0.0, 0.0, 4.0, 4.0).collision(&rr),
            Err(SceneError::UnsupportedOperand { this: "rectangle", .. })
        ));
    }

    #[test]
    fn draw_uses_fill_variant() {
        let mut list = DrawList::new(20, 20);
        rect(1.0, 2.0, 3.0, 4.0).draw(&mut list);

        let image = ImageHandle::new(image::RgbaImage::new(1, 1));
        let mut pic = rect(1.0, 2.0, 3.0, 4.0);
        pic.set_fill(image.clone());
        pic.draw(&mut list);

        let cmds: Vec<_> = list.paint_commands().cloned().collect();
        assert_eq!(
            cmds,
            vec![
                DrawCmd::Rect { rect: Rect::new(1.0, 2.0, 3.0, 4.0), color: Color::WHITE },
                DrawCmd::Image { rect: Rect::new(1.0, 2.0, 3.0, 4.0), image },
            ]
        );
    }
}
