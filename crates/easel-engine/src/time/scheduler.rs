use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of frame timestamps for the scene loop.
///
/// Each call blocks until the next frame is due and returns its timestamp in
/// milliseconds, or `None` when no further frames will come. Timestamps should
/// be monotonic; the frame timer clamps them if they are not.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> Option<f64>;
}

impl<F> FrameScheduler for F
where
    F: FnMut() -> Option<f64>,
{
    fn next_frame(&mut self) -> Option<f64> {
        self()
    }
}

/// Wall-clock scheduler with a fixed frame interval.
///
/// The first frame is due immediately at timestamp `0`. Frame `n` is due at
/// `n * interval` after it; a frame that is already late is returned without
/// sleeping, so a slow frame does not push back every later one.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    interval: Duration,
    origin: Option<Instant>,
    issued: u64,
    limit: Option<u64>,
}

impl IntervalScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, origin: None, issued: 0, limit: None }
    }

    /// Scheduler targeting `fps` frames per second. Non-positive or
    /// non-finite rates fall back to 60.
    pub fn with_fps(fps: f64) -> Self {
        let fps = if fps > 0.0 && fps.is_finite() { fps } else { 60.0 };
        Self::new(Duration::from_secs_f64(1.0 / fps))
    }

    /// Stops yielding frames after `frames` have been issued.
    #[inline]
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.limit.is_some_and(|limit| self.issued >= limit) {
            return None;
        }

        let origin = *self.origin.get_or_insert_with(Instant::now);
        let due = origin + self.interval.saturating_mul(self.issued.min(u32::MAX as u64) as u32);
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }

        self.issued += 1;
        Some(origin.elapsed().as_secs_f64() * 1000.0)
    }
}

/// Scheduler replaying a scripted list of timestamps. Never sleeps.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: VecDeque<f64>,
}

impl ManualScheduler {
    pub fn new(timestamps: impl IntoIterator<Item = f64>) -> Self {
        Self { pending: timestamps.into_iter().collect() }
    }

    /// `count` timestamps starting at `start_ms`, `step_ms` apart.
    pub fn from_interval(start_ms: f64, step_ms: f64, count: usize) -> Self {
        Self::new((0..count).map(|i| start_ms + step_ms * i as f64))
    }

    pub fn push(&mut self, timestamp_ms: f64) {
        self.pending.push_back(timestamp_ms);
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        self.pending.pop_front()
    }
}

/// Cancellation token for a running scene loop.
///
/// Clones share the same flag, so a handle can be moved into a node, a
/// callback or another thread and stop the loop from there. The loop checks
/// it before every frame.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub(crate) fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Directive returned by the between-frames callback of a scene loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_replays_in_order() {
        let mut s = ManualScheduler::from_interval(100.0, 25.0, 3);
        assert_eq!(s.remaining(), 3);
        assert_eq!(s.next_frame(), Some(100.0));
        assert_eq!(s.next_frame(), Some(125.0));
        s.push(500.0);
        assert_eq!(s.next_frame(), Some(150.0));
        assert_eq!(s.next_frame(), Some(500.0));
        assert_eq!(s.next_frame(), None);
    }

    #[test]
    fn closures_are_schedulers() {
        let mut t = 0.0;
        let mut s = move || {
            t += 10.0;
            (t <= 20.0).then_some(t)
        };
        assert_eq!(s.next_frame(), Some(10.0));
        assert_eq!(s.next_frame(), Some(20.0));
        assert_eq!(s.next_frame(), None);
    }

    #[test]
    fn interval_scheduler_is_monotonic_and_limited() {
        let mut s = IntervalScheduler::new(Duration::from_millis(2)).with_frame_limit(3);
        let a = s.next_frame().unwrap();
        let b = s.next_frame().unwrap();
        let c = s.next_frame().unwrap();
        assert!(a <= b && b <= c);
        assert!(c >= 4.0);
        assert_eq!(s.next_frame(), None);
    }

    #[test]
    fn with_fps_rejects_bad_rates() {
        assert_eq!(IntervalScheduler::with_fps(0.0).interval(), Duration::from_secs_f64(1.0 / 60.0));
        assert_eq!(IntervalScheduler::with_fps(50.0).interval(), Duration::from_millis(20));
    }

    #[test]
    fn stop_handle_clones_share_state() {
        let h = StopHandle::new();
        let other = h.clone();
        other.stop();
        assert!(h.is_stopped());
        h.reset();
        assert!(!other.is_stopped());
    }
}
