//! Easel engine crate.
//!
//! A small retained-mode 2D scene: z-ordered nodes painted onto a drawing
//! surface, a per-frame update/redraw loop, pointer hit-testing and collision
//! tests between circles and rectangles.

pub mod coords;
pub mod error;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;

pub use error::SceneError;
