//! Port definitions for the render controller.
//!
//! The controller writes frames into a [`display_surface::DisplaySurface`]
//! and arms its periodic presentation trigger through a
//! [`tick_scheduler::TickScheduler`]; both are supplied by the
//! presentation layer.

pub mod display_surface;
pub mod tick_scheduler;
