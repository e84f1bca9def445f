use core::any::Any;
use core::fmt;

use crate::coords::Vec2;
use crate::input::{PointerEvent, PointerMapper};
use crate::render::DrawContext;
use crate::time::{FrameScheduler, FrameTick, FrameTimer, LoopControl, StopHandle};

use super::{NodeId, SceneNode, SortKey, ZIndex};

struct Entry {
    id: NodeId,
    key: SortKey,
    node: Box<dyn SceneNode>,
}

/// What one call to [`Scene::tick`] did.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    /// 1-based frame number since the loop (or timer) was last reset.
    pub frame_index: u64,
    pub timestamp_ms: f64,
    /// First frame: nodes were drawn without being updated.
    pub bootstrap: bool,
    /// The surface was cleared and every node drawn.
    pub redrawn: bool,
    /// Fps derived from this frame's delta; `0` on the bootstrap frame.
    pub fps: f64,
}

/// Why [`Scene::start_interval`] returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StopReason {
    /// The stop handle fired or the between-frames callback asked to stop.
    Stopped,
    /// The scheduler ran out of frames.
    Exhausted,
}

/// Totals for one run of the frame loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub redraws: u64,
    pub stop_reason: StopReason,
}

/// Registry of scene nodes plus the frame loop that animates them.
///
/// Invariants:
/// - nodes are stored in ascending [`SortKey`] order at all times, so updates,
///   draws and hit tests always see the same deterministic order
/// - among nodes with equal z, the one inserted (or re-keyed) last paints last
///   and wins hit tests
///
/// A node's key is taken from `base().z` when it is inserted. Writing
/// `base_mut().z` afterwards does not reorder the scene; use
/// [`set_node_z`](Scene::set_node_z).
#[derive(Default)]
pub struct Scene {
    entries: Vec<Entry>,
    next_order: u64,
    timer: FrameTimer,
    stop: StopHandle,
    fps_listener: Option<Box<dyn FnMut(i64)>>,
    last_reported_fps: Option<i64>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene whose frame timer uses a custom lower delta clamp.
    pub fn with_timer(timer: FrameTimer) -> Self {
        Self { timer, ..Self::default() }
    }

    // ── node management ───────────────────────────────────────────────────

    /// Inserts a node at its z position and returns its id.
    pub fn add_node(&mut self, node: Box<dyn SceneNode>) -> NodeId {
        let id = NodeId::next();
        let key = self.next_key(node.base().z);
        self.insert(Entry { id, key, node });
        log::debug!("scene: added {id} at z={} ({} nodes)", key.z.get(), self.entries.len());
        id
    }

    /// Boxes and inserts `node`.
    pub fn add<N: SceneNode>(&mut self, node: N) -> NodeId {
        self.add_node(Box::new(node))
    }

    /// Removes the node with `id`. Returns `false` if no such node is present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        self.take_node(id).is_some()
    }

    /// Removes the node with `id` and hands it back.
    pub fn take_node(&mut self, id: NodeId) -> Option<Box<dyn SceneNode>> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        log::debug!("scene: removed {id} ({} nodes)", self.entries.len());
        Some(entry.node)
    }

    /// Keeps only the nodes for which `keep` returns `true`. Returns how many
    /// were removed. Paint order of the survivors is unchanged.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(NodeId, &dyn SceneNode) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|e| keep(e.id, e.node.as_ref()));
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("scene: retain removed {removed} nodes ({} left)", self.entries.len());
        }
        removed
    }

    /// Moves a node to `z`. The node is re-keyed as if newly inserted, so it
    /// paints above any other node already at `z`. Returns `false` if no such
    /// node is present.
    pub fn set_node_z(&mut self, id: NodeId, z: impl Into<ZIndex>) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let z = z.into();
        let mut entry = self.entries.remove(index);
        entry.node.base_mut().z = z;
        entry.key = self.next_key(z);
        self.insert(entry);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── access ────────────────────────────────────────────────────────────

    /// Nodes in paint order (back-to-front).
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &dyn SceneNode> + '_ {
        self.entries.iter().map(|e| e.node.as_ref())
    }

    /// Ids in paint order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn node(&self, id: NodeId) -> Option<&dyn SceneNode> {
        self.index_of(id).map(|i| self.entries[i].node.as_ref())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut dyn SceneNode> {
        let index = self.index_of(id)?;
        Some(self.entries[index].node.as_mut())
    }

    /// The node with `id`, if present and of type `T`.
    pub fn get<T: SceneNode>(&self, id: NodeId) -> Option<&T> {
        let index = self.index_of(id)?;
        let node: &(dyn Any + 'static) = self.entries[index].node.as_ref();
        node.downcast_ref::<T>()
    }

    pub fn get_mut<T: SceneNode>(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        let node: &mut (dyn Any + 'static) = self.entries[index].node.as_mut();
        node.downcast_mut::<T>()
    }

    // ── hit testing ───────────────────────────────────────────────────────

    /// True if any node covers `point`.
    pub fn is_node_at(&self, point: Vec2) -> bool {
        self.entries.iter().any(|e| e.node.covers(point))
    }

    /// Topmost node covering `point`: highest z, then latest inserted.
    pub fn node_at(&self, point: Vec2) -> Option<NodeId> {
        self.entries.iter().rev().find(|e| e.node.covers(point)).map(|e| e.id)
    }

    /// Delivers `event` to the topmost node covering `point` (surface
    /// coordinates). Returns the node that received it.
    pub fn dispatch_click(&mut self, point: Vec2, event: &PointerEvent) -> Option<NodeId> {
        let index = self.entries.iter().rposition(|e| e.node.covers(point))?;
        let entry = &mut self.entries[index];
        log::trace!("scene: pointer at ({}, {}) -> {}", point.x, point.y, entry.id);
        entry.node.on_click(event);
        Some(entry.id)
    }

    /// Maps the event's device position onto the surface with `mapper`, then
    /// dispatches as [`dispatch_click`](Self::dispatch_click). The node receives
    /// the event unmodified.
    pub fn dispatch_pointer(&mut self, mapper: &PointerMapper, event: &PointerEvent) -> Option<NodeId> {
        let point = mapper.to_surface(event.position);
        self.dispatch_click(point, event)
    }

    // ── frame loop ────────────────────────────────────────────────────────

    /// Runs one frame at `timestamp_ms`.
    ///
    /// The first frame after a reset only draws. Every later frame updates all
    /// nodes in paint order with the current fps and redraws if any of them
    /// reported a change. A redraw clears the whole surface, then draws every
    /// node back-to-front.
    pub fn tick(&mut self, timestamp_ms: f64, ctx: &mut dyn DrawContext) -> FrameReport {
        let (bootstrap, fps, mut redraw) = match self.timer.tick(timestamp_ms) {
            FrameTick::Bootstrap => (true, 0.0, true),
            FrameTick::Frame { fps, .. } => (false, fps, false),
        };

        if !bootstrap {
            for entry in &mut self.entries {
                // No short-circuit: every node advances every frame.
                redraw |= entry.node.update(fps);
            }
            self.report_fps();
        }

        if redraw {
            ctx.clear_all();
            for entry in &self.entries {
                entry.node.draw(ctx);
            }
        }

        let report = FrameReport {
            frame_index: self.timer.frame_index(),
            timestamp_ms,
            bootstrap,
            redrawn: redraw,
            fps,
        };
        log::trace!("scene: {report:?}");
        report
    }

    /// Resets timing and runs frames from `scheduler` until it is exhausted or
    /// the [`stop_handle`](Self::stop_handle) fires.
    pub fn start_interval<S, C>(&mut self, scheduler: &mut S, ctx: &mut C) -> LoopSummary
    where
        S: FrameScheduler + ?Sized,
        C: DrawContext,
    {
        self.start_interval_with(scheduler, ctx, |_, _, _| LoopControl::Continue)
    }

    /// Like [`start_interval`](Self::start_interval), calling `after_frame`
    /// once per frame after drawing. The callback may add and remove nodes;
    /// returning [`LoopControl::Stop`] ends the loop.
    pub fn start_interval_with<S, C, F>(
        &mut self,
        scheduler: &mut S,
        ctx: &mut C,
        mut after_frame: F,
    ) -> LoopSummary
    where
        S: FrameScheduler + ?Sized,
        C: DrawContext,
        F: FnMut(&mut Scene, &FrameReport, &mut C) -> LoopControl,
    {
        self.timer.reset();
        self.stop.reset();
        self.last_reported_fps = None;
        log::debug!("scene: loop started with {} nodes", self.entries.len());

        let mut frames = 0;
        let mut redraws = 0;

        let stop_reason = loop {
            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }
            let Some(timestamp_ms) = scheduler.next_frame() else {
                break StopReason::Exhausted;
            };
            // The handle may fire from another thread while the scheduler waits.
            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }

            let report = self.tick(timestamp_ms, ctx);
            frames += 1;
            if report.redrawn {
                redraws += 1;
            }

            if after_frame(&mut *self, &report, &mut *ctx) == LoopControl::Stop {
                break StopReason::Stopped;
            }
        };

        log::debug!("scene: loop ended ({stop_reason:?}) after {frames} frames, {redraws} redraws");
        LoopSummary { frames, redraws, stop_reason }
    }

    /// Handle that stops a running loop before its next frame.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Fps of the most recent frame.
    #[inline]
    pub fn fps(&self) -> f64 {
        self.timer.fps()
    }

    #[inline]
    pub fn fps_rounded(&self) -> i64 {
        self.timer.fps_rounded()
    }

    #[inline]
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Installs a callback invoked with the rounded fps whenever it changes.
    pub fn set_fps_listener<F>(&mut self, listener: F)
    where
        F: FnMut(i64) + 'static,
    {
        self.fps_listener = Some(Box::new(listener));
        self.last_reported_fps = None;
    }

    pub fn clear_fps_listener(&mut self) {
        self.fps_listener = None;
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn next_key(&mut self, z: ZIndex) -> SortKey {
        let key = SortKey::new(z, self.next_order);
        self.next_order = self.next_order.wrapping_add(1);
        key
    }

    fn insert(&mut self, entry: Entry) {
        let at = self.entries.partition_point(|e| e.key <= entry.key);
        self.entries.insert(at, entry);
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn report_fps(&mut self) {
        let Some(listener) = self.fps_listener.as_mut() else {
            return;
        };
        let rounded = self.timer.fps_rounded();
        if self.last_reported_fps != Some(rounded) {
            self.last_reported_fps = Some(rounded);
            listener(rounded);
        }
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("nodes", &self.entries.iter().map(|e| (e.id, e.key)).collect::<Vec<_>>())
            .field("timer", &self.timer)
            .field("stopped", &self.stop.is_stopped())
            .field("fps_listener", &self.fps_listener.is_some())
            .finish()
    }
}
