//! Headless "fading circles" demo.
//!
//! Random circles fade in, stay, fade out and are removed. Every few frames a
//! synthetic click lands somewhere on the surface and cuts the circle under it
//! short. Frames are rasterized on the CPU and snapshots written as PNG files.

mod config;
mod fading_circle;
mod random;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use easel_engine::coords::{Vec2, Viewport};
use easel_engine::input::{MouseButton, PointerEvent, PointerMapper};
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::paint::Color;
use easel_engine::render::{DrawContext, Pixmap};
use easel_engine::scene::{NodeBase, NodeId, Scene, SceneNode, StopReason};
use easel_engine::time::{FrameScheduler, IntervalScheduler, LoopControl, ManualScheduler};

use crate::config::DemoConfig;
use crate::fading_circle::FadingCircle;
use crate::random::random_int;

/// Fills the whole surface. Sits below every other node.
struct Backdrop {
    base: NodeBase,
    color: Color,
}

impl Backdrop {
    fn new(color: Color) -> Self {
        Self { base: NodeBase::new(Vec2::zero(), i32::MIN, 1.0, 1.0), color }
    }
}

impl SceneNode for Backdrop {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_all(self.color);
    }
}

fn random_circle(rng: &mut StdRng, width: u32, height: u32) -> FadingCircle {
    let x = random_int(rng, Some(width as i64), None) as f32;
    let y = random_int(rng, Some(height as i64), None) as f32;
    let radius = random_int(rng, Some(10), Some(60)) as f32;
    let channel = |rng: &mut StdRng| random_int(rng, Some(255), None) as u8;
    let color = Color::from_srgb_u8(channel(rng), channel(rng), channel(rng), 255);
    FadingCircle::new(Vec2::new(x, y), radius, color)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env().context("reading demo configuration")?;
    log::info!(
        "easel demo: {}x{}, {} frames at {} fps, seed {}",
        config.width,
        config.height,
        config.frames,
        config.fps,
        config.seed
    );

    if config.save_every > 0 {
        std::fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("creating {}", config.output_dir.display()))?;
    }

    let background = Color::parse(&config.background).context("parsing EASEL_BACKGROUND")?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut scene = Scene::new();
    scene.add(Backdrop::new(background));
    scene.set_fps_listener(|fps| log::debug!("fps: {fps}"));

    let mut scheduler: Box<dyn FrameScheduler> = if config.realtime {
        Box::new(IntervalScheduler::with_fps(config.fps).with_frame_limit(config.frames))
    } else {
        Box::new(ManualScheduler::from_interval(0.0, config.frame_interval_ms(), config.frames as usize))
    };

    // Surface shown 1:1, so device and bitmap coordinates coincide.
    let mapper = PointerMapper::identity(Viewport::new(config.width as f32, config.height as f32));

    let mut pixmap = Pixmap::new(config.width, config.height);
    let mut live: Vec<NodeId> = Vec::new();
    let mut failure: Option<anyhow::Error> = None;
    let mut snapshots = 0usize;

    let summary = scene.start_interval_with(&mut *scheduler, &mut pixmap, |scene, report, pixmap| {
        if config.save_every > 0 && report.frame_index % config.save_every == 0 {
            let path = config.output_dir.join(format!("frame_{:05}.png", report.frame_index));
            if let Err(err) = pixmap.save_png(&path) {
                failure = Some(err);
                return LoopControl::Stop;
            }
            snapshots += 1;
        }

        let done: Vec<NodeId> = live
            .iter()
            .copied()
            .filter(|&id| scene.get::<FadingCircle>(id).is_none_or(FadingCircle::is_finished))
            .collect();
        if !done.is_empty() {
            scene.retain(|id, _| !done.contains(&id));
            live.retain(|id| !done.contains(id));
        }

        if report.frame_index % config.spawn_every == 0 {
            live.push(scene.add(random_circle(&mut rng, config.width, config.height)));
        }

        if report.frame_index % config.click_every() == 0 {
            let at = Vec2::new(
                random_int(&mut rng, Some(config.width as i64), None) as f32,
                random_int(&mut rng, Some(config.height as i64), None) as f32,
            );
            let event = PointerEvent::click(MouseButton::Left, at);
            if let Some(id) = scene.dispatch_pointer(&mapper, &event) {
                log::info!("click at ({}, {}) hit {id}", at.x, at.y);
            }
        }

        LoopControl::Continue
    });

    if let Some(err) = failure {
        return Err(err.context("writing snapshot"));
    }

    log::info!(
        "done: {} frames, {} redraws, {} snapshots, {} circles left ({})",
        summary.frames,
        summary.redraws,
        snapshots,
        live.len(),
        match summary.stop_reason {
            StopReason::Exhausted => "all frames run",
            StopReason::Stopped => "stopped",
        }
    );
    Ok(())
}
