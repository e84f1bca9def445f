//! Built-in shape nodes and the collision rules between them.
//!
//! Collision is dispatched on [`ShapeRef`], a closed set of shape kinds.
//! Adding a shape means adding a variant and deciding every pair in
//! [`ShapeRef::collision`]; the match is exhaustive on purpose.

mod circle;
mod rect;
mod rotated_rect;

pub use circle::Circle;
pub use rect::Rectangle;
pub use rotated_rect::RotatedRectangle;

use crate::coords::{Rect, Vec2};
use crate::error::SceneError;

use super::SceneNode;

/// Borrowed view of a node's collision shape.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Circle(&'a Circle),
    Rectangle(&'a Rectangle),
    RotatedRectangle(&'a RotatedRectangle),
}

/// Name used in errors for nodes that expose no shape.
const CUSTOM_NODE: &str = "custom node";

impl ShapeRef<'_> {
    pub fn kind(self) -> &'static str {
        match self {
            ShapeRef::Circle(_) => "circle",
            ShapeRef::Rectangle(_) => "rectangle",
            ShapeRef::RotatedRectangle(_) => "rotated rectangle",
        }
    }

    /// Tests whether `self` and `other` overlap.
    ///
    /// - circle/circle: center distance <= sum of radii
    /// - circle/rectangle (either order): see [`circle_meets_box`]
    /// - rectangle/rectangle: closed AABB overlap
    /// - rotated rectangle on the left: always `false`, rotated geometry is
    ///   not modelled for collision
    /// - anything else, including a rotated rectangle or a shapeless node on
    ///   the right: [`SceneError::UnsupportedOperand`]
    pub fn collision(self, other: Option<ShapeRef<'_>>) -> Result<bool, SceneError> {
        let Some(other) = other else {
            return match self {
                ShapeRef::RotatedRectangle(_) => Ok(false),
                _ => Err(SceneError::UnsupportedOperand { this: self.kind(), other: CUSTOM_NODE }),
            };
        };

        match (self, other) {
            (ShapeRef::RotatedRectangle(_), _) => Ok(false),
            (ShapeRef::Circle(a), ShapeRef::Circle(b)) => {
                Ok(a.center().distance(b.center()) <= a.radius() + b.radius())
            }
            (ShapeRef::Circle(c), ShapeRef::Rectangle(r))
            | (ShapeRef::Rectangle(r), ShapeRef::Circle(c)) => {
                Ok(circle_meets_box(c.center(), c.radius(), r.bounds()))
            }
            (ShapeRef::Rectangle(a), ShapeRef::Rectangle(b)) => Ok(a.bounds().overlaps(b.bounds())),
            (ShapeRef::Circle(_) | ShapeRef::Rectangle(_), ShapeRef::RotatedRectangle(_)) => {
                Err(SceneError::UnsupportedOperand { this: self.kind(), other: other.kind() })
            }
        }
    }
}

/// Collision between two arbitrary nodes, dispatched on their shapes.
pub fn collision(a: &dyn SceneNode, b: &dyn SceneNode) -> Result<bool, SceneError> {
    match a.shape() {
        Some(shape) => shape.collision(b.shape()),
        None => Err(SceneError::UnsupportedOperand {
            this: CUSTOM_NODE,
            other: b.shape().map_or(CUSTOM_NODE, ShapeRef::kind),
        }),
    }
}

/// Circle versus axis-aligned box, closed on every boundary.
///
/// True when any of these holds:
/// - the box covers the circle's center
/// - the center is within the box's x-range and the circle's vertical extent
///   reaches the box (top/bottom edges)
/// - the center is within the box's y-range and the circle's horizontal extent
///   reaches the box (left/right edges)
/// - a box corner lies within `radius` of the center
pub(crate) fn circle_meets_box(center: Vec2, radius: f32, rect: Rect) -> bool {
    let min = rect.min();
    let max = rect.max();

    if rect.covers(center) {
        return true;
    }

    let in_x_band = center.x >= min.x && center.x <= max.x;
    if in_x_band && center.y + radius >= min.y && center.y - radius <= max.y {
        return true;
    }

    let in_y_band = center.y >= min.y && center.y <= max.y;
    if in_y_band && center.x + radius >= min.x && center.x - radius <= max.x {
        return true;
    }

    rect.corners().iter().any(|&corner| center.distance(corner) <= radius)
}
