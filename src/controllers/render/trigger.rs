use crate::controllers::render::ports::display_surface::DisplaySurface;
use crate::controllers::render::ports::tick_scheduler::{TickAction, TickCallback};
use crate::controllers::render::session::SessionState;
use crate::core::data::frame_buffer::FrameBuffer;
use log::debug;
use std::sync::Arc;

/// Periodic callback that pushes the session's frame buffer to the display.
///
/// The session state is read before the frame is copied, so the tick that
/// first observes completion presents the finished frame and then asks to
/// be stopped.
pub struct PresentationTrigger {
    session_id: u64,
    frame: Arc<FrameBuffer>,
    state: Arc<SessionState>,
    surface: Arc<dyn DisplaySurface>,
    ticks: u64,
}

impl PresentationTrigger {
    pub(crate) fn new(
        session_id: u64,
        frame: Arc<FrameBuffer>,
        state: Arc<SessionState>,
        surface: Arc<dyn DisplaySurface>,
    ) -> Self {
        Self {
            session_id,
            frame,
            state,
            surface,
            ticks: 0,
        }
    }

    pub fn tick(&mut self) -> TickAction {
        let rendering = !self.state.is_finished();

        self.surface.present(&self.frame.snapshot());
        self.ticks += 1;

        if rendering {
            TickAction::Continue
        } else {
            debug!(
                "session {}: presentation trigger disarmed after {} ticks",
                self.session_id, self.ticks
            );
            TickAction::Stop
        }
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn into_callback(mut self) -> TickCallback {
        Box::new(move || self.tick())
    }
}
