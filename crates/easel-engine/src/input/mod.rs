//! Pointer input.
//!
//! Public API is platform-agnostic. Hosts translate their native events into
//! [`PointerEvent`]s (the optional `winit` feature ships a translator) and map
//! device positions onto the surface bitmap with a [`PointerMapper`].

mod mapper;
mod types;

#[cfg(feature = "winit")]
pub mod platform;

pub use mapper::PointerMapper;
pub use types::{Modifiers, MouseButton, PointerEvent, PointerKind};
