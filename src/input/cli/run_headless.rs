use crate::controllers::render::{
    DisplaySurface, PRESENT_INTERVAL, RenderController, StartError, StartOutcome, WorkerExit,
};
use crate::core::data::frame_buffer::FrameSnapshot;
use crate::input::cli::args::CliOptions;
use crate::presenters::clock::TickClock;
use crate::presenters::log_surface::LogSurface;
use log::info;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// What a headless run produced.
#[derive(Debug)]
pub struct HeadlessReport {
    pub exit: WorkerExit,
    pub frames_presented: u64,
    pub last_frame: Option<FrameSnapshot>,
}

/// Runs one render session on the calling thread's tick loop, stopping it
/// early once `stop_after` has elapsed.
pub fn run_headless(options: CliOptions) -> Result<HeadlessReport, StartError> {
    let (width, height) = options.size;
    let surface = Arc::new(LogSurface::new(width, height));
    let clock = TickClock::new();
    let mut controller = RenderController::new(
        Arc::clone(&surface) as Arc<dyn DisplaySurface>,
        clock.clone(),
        options.config,
    );

    if let StartOutcome::Rejected(err) = controller.start() {
        return Err(err);
    }

    let stop_at = options.stop_after.map(|limit| Instant::now() + limit);

    loop {
        let now = Instant::now();

        if stop_at.is_some_and(|deadline| now >= deadline) && controller.is_rendering() {
            info!("time limit reached");
            controller.stop();
        }

        clock.run_due(now);

        if !controller.is_rendering() && clock.is_idle() {
            break;
        }

        let wake_at = [clock.next_deadline(), stop_at]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(now + PRESENT_INTERVAL);

        thread::sleep(wake_at.saturating_duration_since(Instant::now()));
    }

    let exit = controller
        .reap()
        .cloned()
        .unwrap_or_else(|| WorkerExit::Failed {
            message: "render worker was not joined".to_string(),
        });

    Ok(HeadlessReport {
        exit,
        frames_presented: surface.frames_presented(),
        last_frame: surface.last_frame(),
    })
}
