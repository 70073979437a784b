//! Input adapters for the renderer.
//!
//! Command-line arguments are turned into a configuration store and a
//! surface size. The windowed front end turns key presses into start and
//! stop triggers.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
