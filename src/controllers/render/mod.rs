//! Render controller: coordinates start/stop requests, owns the lifetime of
//! the render worker and arms the periodic presentation trigger.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: `start` / `stop` (or the `on_render_*` control handlers)
//! - **Output**: `DisplaySurface` receives frame snapshots on every tick
//! - **Scheduling**: `TickScheduler` runs the presentation trigger
//! - **Core**: the render pass from `core/` runs on a dedicated worker thread

mod controller;
pub mod outcomes;
pub mod ports;
pub mod session;
pub mod trigger;

pub use controller::{PRESENT_INTERVAL, RenderController};
pub use outcomes::{RenderState, StartError, StartOutcome, StopOutcome};
pub use ports::display_surface::DisplaySurface;
pub use ports::tick_scheduler::{ScheduledTick, TickAction, TickCallback, TickScheduler};
pub use session::{RenderSession, WorkerExit};
