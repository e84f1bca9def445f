//! Retained scene.
//!
//! A [`Scene`] owns boxed [`SceneNode`]s kept in paint order by [`SortKey`]
//! (z ascending, then insertion order). It answers hit tests, routes pointer
//! events to the topmost node under the pointer, and drives the per-frame
//! update/redraw loop against a [`DrawContext`](crate::render::DrawContext).

mod key;
mod node;
mod registry;
pub mod shapes;
mod z_index;

pub use key::SortKey;
pub use node::{NodeBase, NodeId, SceneNode};
pub(crate) use node::normalize_extent;
pub use registry::{FrameReport, LoopSummary, Scene, StopReason};
pub use shapes::{collision, Circle, Rectangle, RotatedRectangle, ShapeRef};
pub use z_index::ZIndex;
