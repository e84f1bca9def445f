//! Time subsystem.
//!
//! Frame timing is driven by timestamps handed in by a [`FrameScheduler`], so
//! the loop is testable without a wall clock:
//! - [`IntervalScheduler`] sleeps to a fixed frame interval and reports elapsed
//!   milliseconds
//! - [`ManualScheduler`] replays scripted timestamps
//!
//! [`FrameTimer`] turns timestamps into per-frame fps.

mod frame_timer;
mod scheduler;

pub use frame_timer::{FrameTick, FrameTimer};
pub use scheduler::{FrameScheduler, IntervalScheduler, LoopControl, ManualScheduler, StopHandle};
