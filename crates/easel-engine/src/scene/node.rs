use core::any::Any;
use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::coords::{round_half_up, Rect, Vec2};
use crate::input::PointerEvent;
use crate::render::DrawContext;

use super::shapes::ShapeRef;
use super::ZIndex;

/// Handle to a node owned by a [`Scene`](super::Scene).
///
/// Ids are unique for the lifetime of the process, so an id issued by one
/// scene never matches a node in another.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Positional state shared by every scene node.
///
/// `position` is the top-left corner for box-like nodes and the center for
/// circles. `width`/`height` are never negative: construction takes the
/// absolute value, and a zero (or NaN) extent becomes `1`.
///
/// New nodes start visible (`is_visible == true`); use
/// [`with_visible`](NodeBase::with_visible) to create one hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBase {
    pub position: Vec2,
    pub z: ZIndex,
    pub width: f32,
    pub height: f32,
    /// Tracked for the application's benefit. The scene does not consult it
    /// when updating, drawing or hit-testing.
    pub is_visible: bool,
}

impl NodeBase {
    pub fn new(position: Vec2, z: impl Into<ZIndex>, width: f32, height: f32) -> Self {
        Self {
            position,
            z: z.into(),
            width: normalize_extent(width),
            height: normalize_extent(height),
            is_visible: true,
        }
    }

    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Box spanned by `position` and the extents.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Vec2::new(self.width, self.height))
    }

    /// Center of the box, with half extents rounded to whole pixels.
    #[inline]
    pub fn mid(&self) -> Vec2 {
        self.position + self.half_extents()
    }

    /// Moves the node so that `mid` becomes its center. Size, z and
    /// visibility are unchanged.
    #[inline]
    pub fn set_mid(&mut self, mid: Vec2) {
        self.position = mid - self.half_extents();
    }

    #[inline]
    pub fn toggle_visibility(&mut self) {
        self.is_visible = !self.is_visible;
    }

    #[inline]
    pub fn set_visible(&mut self) {
        self.is_visible = true;
    }

    #[inline]
    pub fn set_invisible(&mut self) {
        self.is_visible = false;
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::new(round_half_up(self.width / 2.0), round_half_up(self.height / 2.0))
    }
}

pub(crate) fn normalize_extent(v: f32) -> f32 {
    if v == 0.0 || v.is_nan() { 1.0 } else { v.abs() }
}

/// Lifecycle hooks every node in a [`Scene`](super::Scene) implements.
///
/// Only [`base`](SceneNode::base) and [`base_mut`](SceneNode::base_mut) are
/// required; the defaults describe a static node that never changes, draws
/// nothing and covers no point.
///
/// ```rust,ignore
/// struct Blinker { rect: Rectangle, left_ms: f64 }
///
/// impl SceneNode for Blinker {
///     fn base(&self) -> &NodeBase { self.rect.base() }
///     fn base_mut(&mut self) -> &mut NodeBase { self.rect.base_mut() }
///     fn update(&mut self, fps: f64) -> bool {
///         self.left_ms -= 1000.0 / fps;
///         self.left_ms <= 0.0
///     }
///     fn draw(&self, ctx: &mut dyn DrawContext) { self.rect.draw(ctx) }
/// }
/// ```
pub trait SceneNode: Any {
    fn base(&self) -> &NodeBase;

    fn base_mut(&mut self) -> &mut NodeBase;

    /// Advances the node by one frame. Returns `true` if its appearance changed
    /// and the surface must be redrawn.
    fn update(&mut self, _fps: f64) -> bool {
        false
    }

    /// Paints the node. Called on every redraw, so it must not change node
    /// state and must leave the surface transform as it found it.
    fn draw(&self, _ctx: &mut dyn DrawContext) {}

    /// Pointer event handler. Only the topmost node under the pointer receives it.
    fn on_click(&mut self, _event: &PointerEvent) {}

    /// Point containment, consistent with what `draw` paints.
    fn covers(&self, _point: Vec2) -> bool {
        false
    }

    /// The collision shape of this node, if it has one.
    fn shape(&self) -> Option<ShapeRef<'_>> {
        None
    }

    fn mid(&self) -> Vec2 {
        self.base().mid()
    }

    fn set_mid(&mut self, mid: Vec2) {
        self.base_mut().set_mid(mid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_are_normalized() {
        let base = NodeBase::new(Vec2::zero(), 0, -4.0, 0.0);
        assert_eq!(base.width, 4.0);
        assert_eq!(base.height, 1.0);
    }

    #[test]
    fn mid_rounds_half_extents() {
        let base = NodeBase::new(Vec2::new(10.0, 20.0), 0, 5.0, 4.0);
        assert_eq!(base.mid(), Vec2::new(13.0, 22.0));
    }

    #[test]
    fn set_mid_keeps_size_z_and_visibility() {
        let mut base = NodeBase::new(Vec2::new(0.0, 0.0), 7, 10.0, 6.0).with_visible(false);
        base.set_mid(Vec2::new(50.0, 50.0));
        assert_eq!(base.position, Vec2::new(45.0, 47.0));
        assert_eq!(base.mid(), Vec2::new(50.0, 50.0));
        assert_eq!((base.width, base.height, base.z), (10.0, 6.0, ZIndex(7)));
        assert!(!base.is_visible);
    }

    #[test]
    fn new_nodes_start_visible() {
        assert!(NodeBase::new(Vec2::zero(), 0, 1.0, 1.0).is_visible);
        assert!(!NodeBase::new(Vec2::zero(), 0, 1.0, 1.0).with_visible(false).is_visible);
    }

    #[test]
    fn visibility_helpers() {
        let mut base = NodeBase::new(Vec2::zero(), 0, 1.0, 1.0);
        base.toggle_visibility();
        assert!(!base.is_visible);
        base.set_visible();
        assert!(base.is_visible);
        base.set_invisible();
        assert!(!base.is_visible);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(NodeId::next(), NodeId::next());
    }
}
