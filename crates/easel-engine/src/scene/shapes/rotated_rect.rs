use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::paint::Fill;
use crate::render::DrawContext;
use crate::scene::{NodeBase, SceneNode, ZIndex};

use super::{Rectangle, ShapeRef};

/// Rectangle painted under a rotation about a pivot.
///
/// Rotation only affects painting. `covers` and `collision` always report
/// `false`: rotated geometry is not modelled for hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedRectangle {
    rect: Rectangle,
    angle: f32,
    /// `None` until the first `rotate` call; painted unrotated meanwhile.
    pivot: Option<Vec2>,
}

impl RotatedRectangle {
    pub fn new(
        x: f32,
        y: f32,
        z: impl Into<ZIndex>,
        width: f32,
        height: f32,
        fill: impl Into<Fill>,
    ) -> Self {
        Self {
            rect: Rectangle::new(x, y, z, width, height, fill),
            angle: 0.0,
            pivot: None,
        }
    }

    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.rect = self.rect.with_visible(visible);
        self
    }

    /// Sets the rotation. `pivot` defaults to the current center of the
    /// rectangle and `angle` (radians) to `0`.
    pub fn rotate(&mut self, pivot: Option<Vec2>, angle: Option<f32>) {
        self.pivot = Some(pivot.unwrap_or_else(|| self.rect.bounds().center()));
        self.angle = angle.unwrap_or(0.0);
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn pivot(&self) -> Option<Vec2> {
        self.pivot
    }

    /// The unrotated box.
    #[inline]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    #[inline]
    pub fn fill(&self) -> &Fill {
        self.rect.fill()
    }

    #[inline]
    pub fn set_fill(&mut self, fill: impl Into<Fill>) {
        self.rect.set_fill(fill);
    }

    /// Always `Ok(false)`.
    pub fn collision(&self, _other: &dyn SceneNode) -> Result<bool, SceneError> {
        Ok(false)
    }
}

impl SceneNode for RotatedRectangle {
    fn base(&self) -> &NodeBase {
        self.rect.base()
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        self.rect.base_mut()
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        let Some(pivot) = self.pivot else {
            self.rect.draw(ctx);
            return;
        };

        let bounds = self.rect.bounds();
        let local = Rect::from_origin_size(bounds.origin - pivot, bounds.size);

        ctx.translate(pivot);
        ctx.rotate(self.angle);
        ctx.paint_rect(self.rect.fill(), local);
        ctx.rotate(-self.angle);
        ctx.translate(-pivot);
    }

    fn covers(&self, _point: Vec2) -> bool {
        false
    }

    fn shape(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::RotatedRectangle(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::render::{DrawCmd, DrawList};
    use crate::scene::shapes::Circle;
    use core::f32::consts::FRAC_PI_4;

    fn rotated() -> RotatedRectangle {
        RotatedRectangle::new(10.0, 20.0, 0, 8.0, 4.0, Color::BLACK)
    }

    #[test]
    fn unrotated_draw_matches_rectangle() {
        let mut list = DrawList::new(64, 64);
        rotated().draw(&mut list);
        assert_eq!(
            list.items().iter().map(|i| i.cmd.clone()).collect::<Vec<_>>(),
            vec![DrawCmd::Rect { rect: Rect::new(10.0, 20.0, 8.0, 4.0), color: Color::BLACK }]
        );
    }

    #[test]
    fn rotate_defaults_pivot_to_center_and_angle_to_zero() {
        let mut rr = rotated();
        rr.rotate(None, None);
        assert_eq!(rr.pivot(), Some(Vec2::new(14.0, 22.0)));
        assert_eq!(rr.angle(), 0.0);
    }

    #[test]
    fn rotated_draw_is_bracketed_by_matched_transforms() {
        let mut rr = rotated();
        rr.rotate(Some(Vec2::new(12.0, 21.0)), Some(FRAC_PI_4));

        let mut list = DrawList::new(64, 64);
        rr.draw(&mut list);

        let cmds: Vec<_> = list.items().iter().map(|i| i.cmd.clone()).collect();
        assert_eq!(
            cmds,
            vec![
                DrawCmd::Translate(Vec2::new(12.0, 21.0)),
                DrawCmd::Rotate(FRAC_PI_4),
                DrawCmd::Rect { rect: Rect::new(-2.0, -1.0, 8.0, 4.0), color: Color::BLACK },
                DrawCmd::Rotate(-FRAC_PI_4),
                DrawCmd::Translate(Vec2::new(-12.0, -21.0)),
            ]
        );
        assert!(list.transform().is_identity_within(1e-5));
    }

    #[test]
    fn covers_and_collision_are_always_false() {
        let mut rr = rotated();
        rr.rotate(None, Some(1.0));
        let inside = Circle::new(14.0, 22.0, 0, 50.0, Color::WHITE);
        assert!(!rr.covers(Vec2::new(14.0, 22.0)));
        assert!(!rr.covers(Vec2::new(10.0, 20.0)));
        assert_eq!(rr.collision(&inside), Ok(false));
        assert_eq!(ShapeRef::RotatedRectangle(&rr).collision(None), Ok(false));
    }
}
