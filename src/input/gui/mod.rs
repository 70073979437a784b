//! Windowed front end: a `winit` event loop, a `pixels` surface and the
//! render controller driven by the keyboard.

pub mod events;
pub mod run_gui;

pub use run_gui::{GuiError, run_gui};
