/// Outcome of one [`FrameTimer::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameTick {
    /// First frame since the last reset. No delta exists yet.
    Bootstrap,
    Frame {
        /// Milliseconds since the previous frame, after clamping.
        delta_ms: f64,
        /// `1000 / delta_ms`.
        fps: f64,
    },
}

/// Start / last-frame timestamps and the fps derived from them.
///
/// Timestamps are milliseconds on any monotonic timeline chosen by the
/// scheduler. The delta is clamped from below so that a repeated or
/// out-of-order timestamp never yields an infinite or negative fps.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    start: Option<f64>,
    last: Option<f64>,
    fps: f64,
    frame_index: u64,
    min_delta_ms: f64,
}

impl FrameTimer {
    pub const DEFAULT_MIN_DELTA_MS: f64 = 0.1;

    pub fn new() -> Self {
        Self::with_min_delta(Self::DEFAULT_MIN_DELTA_MS)
    }

    /// Timer with a custom lower clamp for the frame delta. Non-positive or
    /// non-finite values fall back to the default.
    pub fn with_min_delta(min_delta_ms: f64) -> Self {
        let min_delta_ms = if min_delta_ms > 0.0 && min_delta_ms.is_finite() {
            min_delta_ms
        } else {
            Self::DEFAULT_MIN_DELTA_MS
        };
        Self {
            start: None,
            last: None,
            fps: 0.0,
            frame_index: 0,
            min_delta_ms,
        }
    }

    /// Forgets all timing state. The next tick is a bootstrap frame.
    pub fn reset(&mut self) {
        self.start = None;
        self.last = None;
        self.fps = 0.0;
        self.frame_index = 0;
    }

    /// Records a frame at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameTick {
        self.frame_index = self.frame_index.wrapping_add(1);

        let Some(last) = self.last else {
            self.start = Some(now_ms);
            self.last = Some(now_ms);
            return FrameTick::Bootstrap;
        };

        let raw = now_ms - last;
        if raw <= 0.0 || !raw.is_finite() {
            log::warn!("non-monotonic frame timestamp: {now_ms} after {last}");
        }
        let delta_ms = if raw.is_finite() { raw.max(self.min_delta_ms) } else { self.min_delta_ms };

        self.fps = 1000.0 / delta_ms;
        self.last = Some(now_ms);

        FrameTick::Frame { delta_ms, fps: self.fps }
    }

    /// Timestamp of the bootstrap frame.
    #[inline]
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// Timestamp of the most recent frame.
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Fps of the most recent frame; `0` until a second frame arrives.
    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// [`fps`](Self::fps) rounded to the nearest integer, halves up.
    #[inline]
    pub fn fps_rounded(&self) -> i64 {
        (self.fps + 0.5).floor() as i64
    }

    /// Frames ticked since the last reset, bootstrap included.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Milliseconds between the bootstrap frame and the most recent one.
    pub fn elapsed_ms(&self) -> f64 {
        match (self.start, self.last) {
            (Some(start), Some(last)) => last - start,
            _ => 0.0,
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
