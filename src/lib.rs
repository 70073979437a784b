pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::store::ConfigStore;
pub use controllers::render::{RenderController, RenderState, StartOutcome, StopOutcome, WorkerExit};
pub use input::cli::args::{CliArgs, CliOptions};
pub use input::cli::run_headless::{HeadlessReport, run_headless};
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
pub use presenters::clock::TickClock;
pub use presenters::log_surface::LogSurface;
