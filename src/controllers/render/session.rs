use crate::config::settings::RenderSettings;
use crate::controllers::render::ports::display_surface::DisplaySurface;
use crate::controllers::render::ports::tick_scheduler::{ScheduledTick, TickScheduler};
use crate::controllers::render::trigger::PresentationTrigger;
use crate::core::actions::cancellation::CancelFlag;
use crate::core::actions::render_pass::render_pass::{RenderPassError, render_pass_cancelable};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::cache::ColourCache;
use log::{error, info};
use std::any::Any;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How a render worker ended.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerExit {
    Completed { elapsed: Duration },
    /// Cancelled before `at` was computed.
    Aborted { at: Point },
    Failed { message: String },
}

#[derive(Debug, Default)]
pub(crate) struct SessionState {
    finished: AtomicBool,
}

impl SessionState {
    pub(crate) fn mark_finished(&self) {
        self.finished.store(true, Ordering::Release);
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

/// One in-flight render: the frame buffer, the worker filling it, the
/// cancellation flag the worker observes and the armed presentation trigger.
pub struct RenderSession {
    id: u64,
    settings: RenderSettings,
    viewport: Viewport,
    frame: Arc<FrameBuffer>,
    cancel: CancelFlag,
    state: Arc<SessionState>,
    started_at: Instant,
    worker: Option<JoinHandle<WorkerExit>>,
    presenter: Option<Box<dyn ScheduledTick>>,
    exit: Option<WorkerExit>,
}

impl RenderSession {
    pub(crate) fn start<S: TickScheduler>(
        id: u64,
        settings: RenderSettings,
        viewport: Viewport,
        colours: ColourCache,
        surface: Arc<dyn DisplaySurface>,
        scheduler: &S,
        present_interval: Duration,
    ) -> io::Result<Self> {
        let frame = Arc::new(FrameBuffer::new(viewport.width(), viewport.height()));
        let cancel = CancelFlag::new();
        let state = Arc::new(SessionState::default());
        let started_at = Instant::now();

        let worker = {
            let frame = Arc::clone(&frame);
            let cancel = cancel.clone();
            let state = Arc::clone(&state);

            thread::Builder::new()
                .name(format!("mandel-render-{}", id))
                .spawn(move || {
                    run_worker(id, &viewport, &colours, &frame, &cancel, &state, started_at)
                })?
        };

        let trigger = PresentationTrigger::new(id, Arc::clone(&frame), Arc::clone(&state), surface);
        let presenter = scheduler.schedule_interval(present_interval, trigger.into_callback());

        Ok(Self {
            id,
            settings,
            viewport,
            frame,
            cancel,
            state,
            started_at,
            worker: Some(worker),
            presenter: Some(presenter),
            exit: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> &Arc<FrameBuffer> {
        &self.frame
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Set once the worker has been joined.
    #[must_use]
    pub fn exit(&self) -> Option<&WorkerExit> {
        self.exit.as_ref()
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        !self.state.is_finished()
    }

    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.presenter
            .as_ref()
            .is_some_and(|presenter| presenter.is_armed())
    }

    /// Cancels the worker, disarms the trigger and blocks until the worker
    /// thread has exited. Returns `None` if the worker was already joined.
    pub(crate) fn stop(&mut self) -> Option<WorkerExit> {
        self.cancel.cancel();
        self.disarm();

        let exit = self.join();
        self.state.mark_finished();

        exit
    }

    /// Joins a worker that finished on its own.
    pub(crate) fn reap(&mut self) {
        if self.state.is_finished() {
            self.disarm();
            self.join();
        }
    }

    fn disarm(&mut self) {
        if let Some(mut presenter) = self.presenter.take() {
            presenter.cancel();
        }
    }

    fn join(&mut self) -> Option<WorkerExit> {
        let worker = self.worker.take()?;

        let exit = worker.join().unwrap_or_else(|panic| {
            let message = panic_message(panic.as_ref());
            error!("session {}: render worker panicked: {}", self.id, message);
            WorkerExit::Failed { message }
        });

        self.exit = Some(exit.clone());
        Some(exit)
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.stop();
        } else {
            self.disarm();
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn run_worker(
    id: u64,
    viewport: &Viewport,
    colours: &ColourCache,
    frame: &FrameBuffer,
    cancel: &CancelFlag,
    state: &SessionState,
    started_at: Instant,
) -> WorkerExit {
    match render_pass_cancelable(viewport, colours, frame, cancel) {
        Ok(()) => {
            let elapsed = started_at.elapsed();
            state.mark_finished();

            info!(
                "session {}: rendering complete, time spent: {:.3}s",
                id,
                elapsed.as_secs_f64()
            );

            WorkerExit::Completed { elapsed }
        }
        Err(RenderPassError::Cancelled { at }) => {
            info!("session {}: aborting rendering at x={}, y={}", id, at.x, at.y);

            WorkerExit::Aborted { at }
        }
        Err(err) => {
            state.mark_finished();
            error!("session {}: rendering failed: {}", id, err);

            WorkerExit::Failed {
                message: err.to_string(),
            }
        }
    }
}
