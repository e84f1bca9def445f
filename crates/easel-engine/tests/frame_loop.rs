use std::cell::RefCell;
use std::rc::Rc;

use easel_engine::coords::{Rect, Vec2};
use easel_engine::paint::Color;
use easel_engine::render::{DrawCmd, DrawContext, DrawList};
use easel_engine::scene::{Circle, NodeBase, Rectangle, Scene, SceneNode, StopReason};
use easel_engine::time::{LoopControl, ManualScheduler};

type Log = Rc<RefCell<Vec<String>>>;

/// Node that records its updates and draws into a shared log and reports a
/// change on chosen update calls.
struct Probe {
    base: NodeBase,
    name: &'static str,
    log: Log,
    fps_seen: Vec<f64>,
    dirty_on: Vec<usize>,
}

impl Probe {
    fn new(name: &'static str, z: i32, log: &Log) -> Self {
        Self {
            base: NodeBase::new(Vec2::zero(), z, 1.0, 1.0),
            name,
            log: Rc::clone(log),
            fps_seen: Vec::new(),
            dirty_on: Vec::new(),
        }
    }

    fn dirty_on(mut self, updates: &[usize]) -> Self {
        self.dirty_on = updates.to_vec();
        self
    }
}

impl SceneNode for Probe {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn update(&mut self, fps: f64) -> bool {
        self.fps_seen.push(fps);
        self.log.borrow_mut().push(format!("update {}", self.name));
        self.dirty_on.contains(&self.fps_seen.len())
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        self.log.borrow_mut().push(format!("draw {}", self.name));
        ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
    }
}

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

// ── single frames ─────────────────────────────────────────────────────────

#[test]
fn bootstrap_frame_draws_without_updating() {
    let log = log();
    let mut scene = Scene::new();
    scene.add(Probe::new("front", 5, &log));
    scene.add(Probe::new("back", -2, &log));
    scene.add(Probe::new("middle", 0, &log));

    let mut list = DrawList::new(32, 32);
    let report = scene.tick(1_000.0, &mut list);

    assert!(report.bootstrap);
    assert!(report.redrawn);
    assert_eq!(report.fps, 0.0);
    assert_eq!(take(&log), vec!["draw back", "draw middle", "draw front"]);
    assert_eq!(list.items()[0].cmd, DrawCmd::Clear(Rect::new(0.0, 0.0, 32.0, 32.0)));
}

#[test]
fn unchanged_frame_updates_but_skips_redraw() {
    let log = log();
    let mut scene = Scene::new();
    scene.add(Probe::new("a", 1, &log));
    scene.add(Probe::new("b", 0, &log));

    let mut list = DrawList::new(8, 8);
    scene.tick(0.0, &mut list);
    take(&log);
    list.reset();

    let report = scene.tick(16.0, &mut list);
    assert!(!report.bootstrap);
    assert!(!report.redrawn);
    assert_eq!(take(&log), vec!["update b", "update a"]);
    assert!(list.items().is_empty());
}

#[test]
fn one_changed_node_redraws_everything_in_z_order() {
    let log = log();
    let mut scene = Scene::new();
    scene.add(Probe::new("top", 9, &log).dirty_on(&[1]));
    scene.add(Probe::new("bottom", 1, &log));

    let mut list = DrawList::new(8, 8);
    scene.tick(0.0, &mut list);
    take(&log);

    let report = scene.tick(20.0, &mut list);
    assert!(report.redrawn);
    assert_eq!(report.fps, 50.0);
    assert_eq!(take(&log), vec!["update bottom", "update top", "draw bottom", "draw top"]);
}

#[test]
fn fps_is_derived_from_frame_delta() {
    let log = log();
    let mut scene = Scene::new();
    let id = scene.add(Probe::new("p", 0, &log));

    let mut list = DrawList::new(8, 8);
    for ts in [0.0, 10.0, 30.0, 70.0] {
        scene.tick(ts, &mut list);
    }

    assert_eq!(scene.get::<Probe>(id).unwrap().fps_seen, vec![100.0, 50.0, 25.0]);
    assert_eq!(scene.fps_rounded(), 25);
}

// ── loop ──────────────────────────────────────────────────────────────────

#[test]
fn loop_runs_until_scheduler_is_exhausted() {
    let log = log();
    let mut scene = Scene::new();
    scene.add(Probe::new("p", 0, &log).dirty_on(&[2]));

    let mut list = DrawList::new(8, 8);
    let mut scheduler = ManualScheduler::from_interval(0.0, 16.0, 5);
    let summary = scene.start_interval(&mut scheduler, &mut list);

    assert_eq!(summary.frames, 5);
    // Bootstrap plus the second update.
    assert_eq!(summary.redraws, 2);
    assert_eq!(summary.stop_reason, StopReason::Exhausted);
}

#[test]
fn loop_restarts_with_a_bootstrap_frame() {
    let log = log();
    let mut scene = Scene::new();
    scene.add(Probe::new("p", 0, &log));
    let mut list = DrawList::new(8, 8);

    scene.start_interval(&mut ManualScheduler::from_interval(0.0, 10.0, 3), &mut list);
    take(&log);

    scene.start_interval(&mut ManualScheduler::new([5_000.0]), &mut list);
    assert_eq!(take(&log), vec!["draw p"]);
}

#[test]
fn stop_handle_ends_the_loop_before_the_next_frame() {
    let mut scene = Scene::new();
    let handle = scene.stop_handle();
    let mut list = DrawList::new(8, 8);
    let mut scheduler = ManualScheduler::from_interval(0.0, 10.0, 100);

    let summary = scene.start_interval_with(&mut scheduler, &mut list, |_, report, _| {
        if report.frame_index == 3 {
            handle.stop();
        }
        LoopControl::Continue
    });

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.stop_reason, StopReason::Stopped);
    assert_eq!(scheduler.remaining(), 97);
}

#[test]
fn between_frames_callback_can_edit_the_scene() {
    let mut scene = Scene::new();
    let mut list = DrawList::new(64, 64);
    let mut scheduler = ManualScheduler::from_interval(0.0, 10.0, 10);

    let summary = scene.start_interval_with(&mut scheduler, &mut list, |scene, report, _| {
        if report.frame_index <= 3 {
            let x = report.frame_index as f32 * 10.0;
            scene.add(Circle::new(x, 10.0, 0, 2.0, Color::WHITE));
        }
        if report.frame_index == 4 {
            assert_eq!(scene.len(), 3);
            assert_eq!(scene.retain(|_, node| node.mid().x > 10.0), 1);
            return LoopControl::Stop;
        }
        LoopControl::Continue
    });

    assert_eq!(summary.frames, 4);
    assert_eq!(summary.stop_reason, StopReason::Stopped);
    assert_eq!(scene.nodes().map(|n| n.mid()).collect::<Vec<_>>(), vec![
        Vec2::new(20.0, 10.0),
        Vec2::new(30.0, 10.0),
    ]);
}

#[test]
fn static_scene_paints_once() {
    let mut scene = Scene::new();
    scene.add(Rectangle::new(0.0, 0.0, 0, 4.0, 4.0, Color::BLACK));
    let mut list = DrawList::new(8, 8);

    let summary = scene.start_interval(&mut ManualScheduler::from_interval(0.0, 16.0, 30), &mut list);

    assert_eq!(summary.frames, 30);
    assert_eq!(summary.redraws, 1);
    assert_eq!(list.paint_commands().count(), 2);
}
