//! Adapters that drive the render controller's output ports.
//!
//! [`clock::TickClock`] runs presentation ticks on the thread that owns the
//! event loop. Display surfaces receive the frames those ticks copy out.

pub mod clock;
pub mod log_surface;
#[cfg(feature = "gui")]
pub mod pixels;
