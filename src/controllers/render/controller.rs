use crate::config::settings::RenderSettings;
use crate::config::store::ConfigStore;
use crate::controllers::render::outcomes::{RenderState, StartError, StartOutcome, StopOutcome};
use crate::controllers::render::ports::display_surface::DisplaySurface;
use crate::controllers::render::ports::tick_scheduler::TickScheduler;
use crate::controllers::render::session::{RenderSession, WorkerExit};
use crate::core::data::frame_buffer::FrameSnapshot;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

/// 20 Hz presentation cadence.
pub const PRESENT_INTERVAL: Duration = Duration::from_millis(50);

/// Idle/Rendering state machine around at most one [`RenderSession`].
///
/// Configuration is read from the store when a session starts; edits made
/// while rendering apply to the next session only.
pub struct RenderController<S: TickScheduler> {
    surface: Arc<dyn DisplaySurface>,
    scheduler: S,
    config: ConfigStore,
    present_interval: Duration,
    session: Option<RenderSession>,
    sessions_started: u64,
}

impl<S: TickScheduler> RenderController<S> {
    pub fn new(surface: Arc<dyn DisplaySurface>, scheduler: S, config: ConfigStore) -> Self {
        Self {
            surface,
            scheduler,
            config,
            present_interval: PRESENT_INTERVAL,
            session: None,
            sessions_started: 0,
        }
    }

    #[must_use]
    pub fn with_present_interval(mut self, present_interval: Duration) -> Self {
        self.present_interval = present_interval;
        self
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        if self.is_rendering() {
            RenderState::Rendering
        } else {
            RenderState::Idle
        }
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(RenderSession::is_rendering)
    }

    /// The active session, or the last one if it has ended.
    #[must_use]
    pub fn session(&self) -> Option<&RenderSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<u64> {
        self.session.as_ref().map(RenderSession::id)
    }

    #[must_use]
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn frame_snapshot(&self) -> Option<FrameSnapshot> {
        self.session
            .as_ref()
            .map(|session| session.frame().snapshot())
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.is_rendering() {
            info!("already rendering");
            return StartOutcome::AlreadyRendering;
        }

        // drop the previous session before allocating the next frame
        if let Some(mut previous) = self.session.take() {
            previous.reap();
        }

        match self.start_session() {
            Ok(session_id) => StartOutcome::Started { session_id },
            Err(err) => {
                warn!("cannot start rendering: {}", err);
                StartOutcome::Rejected(err)
            }
        }
    }

    pub fn stop(&mut self) -> StopOutcome {
        if !self.is_rendering() {
            if let Some(session) = self.session.as_mut() {
                session.reap();
            }
            info!("not rendering");
            return StopOutcome::NotRendering;
        }

        let Some(session) = self.session.as_mut() else {
            return StopOutcome::NotRendering;
        };

        info!("stop rendering");

        let Some(exit) = session.stop() else {
            return StopOutcome::NotRendering;
        };

        self.surface.present(&session.frame().snapshot());

        StopOutcome::Stopped {
            session_id: session.id(),
            exit,
        }
    }

    /// Joins a session whose worker finished on its own and reports how it
    /// ended. `None` while the session is still rendering.
    pub fn reap(&mut self) -> Option<&WorkerExit> {
        let session = self.session.as_mut()?;
        session.reap();
        session.exit()
    }

    /// Control handler for a start trigger. Returns `false` only when the
    /// session could not be started.
    pub fn on_render_start(&mut self) -> bool {
        !matches!(self.start(), StartOutcome::Rejected(_))
    }

    /// Control handler for a stop trigger; stopping is always handled.
    pub fn on_render_stop(&mut self) -> bool {
        self.stop();
        true
    }

    fn start_session(&mut self) -> Result<u64, StartError> {
        let (settings, warnings) = RenderSettings::from_store(&self.config);

        for warning in &warnings {
            warn!("configuration: {}", warning);
        }

        let (width, height) = self.surface.size();
        let viewport = settings.viewport(width, height)?;
        let colours = settings.colour_cache()?;
        let session_id = self.sessions_started + 1;

        let session = RenderSession::start(
            session_id,
            settings,
            viewport,
            colours,
            Arc::clone(&self.surface),
            &self.scheduler,
            self.present_interval,
        )?;

        info!(
            "start rendering: session {}, {}x{}, max_iter {}, algorithm {}",
            session_id, width, height, settings.max_iterations, settings.algorithm
        );

        self.sessions_started = session_id;
        self.session = Some(session);

        Ok(session_id)
    }
}

impl<S: TickScheduler> Drop for RenderController<S> {
    fn drop(&mut self) {
        if self.is_rendering() {
            self.stop();
        }
    }
}
