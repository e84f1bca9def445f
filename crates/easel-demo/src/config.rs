use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Demo settings. Every field can be overridden by an `EASEL_*` environment
/// variable named after it, e.g. `EASEL_WIDTH=1024`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    /// Frames to run before exiting.
    pub frames: u64,
    /// Target frame rate. Also sets the simulated frame interval when not
    /// running in real time.
    pub fps: f64,
    /// A new circle is spawned every this many frames.
    pub spawn_every: u64,
    /// A PNG snapshot is written every this many frames. `0` disables snapshots.
    pub save_every: u64,
    pub output_dir: PathBuf,
    /// CSS-like color string painted behind the circles.
    pub background: String,
    pub seed: u64,
    /// Sleep between frames instead of replaying simulated timestamps.
    pub realtime: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            frames: 600,
            fps: 60.0,
            spawn_every: 6,
            save_every: 60,
            output_dir: PathBuf::from("frames"),
            background: "#fff".to_owned(),
            seed: 0x5eed,
            realtime: false,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults overridden by `lookup(EASEL_*)`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let cfg = Self {
            width: read(&lookup, "EASEL_WIDTH", d.width)?,
            height: read(&lookup, "EASEL_HEIGHT", d.height)?,
            frames: read(&lookup, "EASEL_FRAMES", d.frames)?,
            fps: read(&lookup, "EASEL_FPS", d.fps)?,
            spawn_every: read(&lookup, "EASEL_SPAWN_EVERY", d.spawn_every)?,
            save_every: read(&lookup, "EASEL_SAVE_EVERY", d.save_every)?,
            output_dir: read(&lookup, "EASEL_OUTPUT_DIR", d.output_dir)?,
            background: read(&lookup, "EASEL_BACKGROUND", d.background)?,
            seed: read(&lookup, "EASEL_SEED", d.seed)?,
            realtime: read(&lookup, "EASEL_REALTIME", d.realtime)?,
        };

        anyhow::ensure!(cfg.width > 0 && cfg.height > 0, "surface size must be non-zero");
        anyhow::ensure!(cfg.fps > 0.0 && cfg.fps.is_finite(), "fps must be positive");
        anyhow::ensure!(cfg.spawn_every > 0, "EASEL_SPAWN_EVERY must be at least 1");
        Ok(cfg)
    }

    /// A synthetic click is sent every this many frames.
    pub fn click_every(&self) -> u64 {
        self.spawn_every.saturating_mul(10)
    }

    /// Simulated milliseconds between frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps
    }
}

fn read<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().with_context(|| format!("invalid {key}={raw:?}")),
        None => Ok(default),
    }
}
