use easel_engine::coords::Vec2;
use easel_engine::input::PointerEvent;
use easel_engine::paint::Fill;
use easel_engine::render::DrawContext;
use easel_engine::scene::{Circle, NodeBase, SceneNode, ShapeRef};

/// Phase lengths in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Durations {
    pub fade_in: f64,
    pub stay: f64,
    pub fade_out: f64,
}

impl Default for Durations {
    fn default() -> Self {
        Self { fade_in: 800.0, stay: 1000.0, fade_out: 800.0 }
    }
}

/// Circle that fades in, stays, fades out and then reports itself finished.
///
/// Each phase counts down by the frame's duration (`1000 / fps`). Opacity
/// approaches its target by the remaining fraction of the phase each frame.
#[derive(Debug, Clone)]
pub struct FadingCircle {
    circle: Circle,
    left: Durations,
    target_opacity: f64,
    opacity: f64,
    finished: bool,
}

impl FadingCircle {
    pub const Z: i32 = 1;
    pub const DEFAULT_OPACITY: f64 = 0.7;

    pub fn new(center: Vec2, radius: f32, fill: impl Into<Fill>) -> Self {
        Self {
            circle: Circle::new(center.x, center.y, Self::Z, radius, fill),
            left: Durations::default(),
            target_opacity: Self::DEFAULT_OPACITY,
            opacity: 0.0,
            finished: false,
        }
    }

    pub fn with_durations(mut self, durations: Durations) -> Self {
        self.left = durations;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.target_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// True once the fade-out has run out. The owner removes finished circles.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Skips the remaining fade-in and stay.
    pub fn start_fade_out(&mut self) {
        self.left.fade_in = 0.0;
        self.left.stay = 0.0;
    }
}

impl SceneNode for FadingCircle {
    fn base(&self) -> &NodeBase {
        self.circle.base()
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        self.circle.base_mut()
    }

    fn update(&mut self, fps: f64) -> bool {
        let frame_ms = 1000.0 / fps;

        if self.left.fade_in > 0.0 {
            self.opacity += (self.target_opacity - self.opacity) / (self.left.fade_in / frame_ms);
            self.left.fade_in -= frame_ms;
            true
        } else if self.left.stay > 0.0 {
            self.left.stay -= frame_ms;
            false
        } else if self.left.fade_out > 0.0 {
            self.opacity -= self.opacity / (self.left.fade_out / frame_ms);
            self.left.fade_out -= frame_ms;
            true
        } else {
            self.finished = true;
            false
        }
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        let previous = ctx.global_alpha();
        // The last fade-out step can overshoot below zero.
        ctx.set_global_alpha(self.opacity.max(0.0) as f32);
        self.circle.draw(ctx);
        ctx.set_global_alpha(previous);
    }

    fn on_click(&mut self, event: &PointerEvent) {
        log::debug!("fading circle clicked at ({}, {})", event.position.x, event.position.y);
        self.start_fade_out();
    }

    fn covers(&self, point: Vec2) -> bool {
        self.circle.covers(point)
    }

    fn shape(&self) -> Option<ShapeRef<'_>> {
        self.circle.shape()
    }

    fn mid(&self) -> Vec2 {
        self.circle.mid()
    }

    fn set_mid(&mut self, mid: Vec2) {
        self.circle.set_mid(mid);
    }
}
