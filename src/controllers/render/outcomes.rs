use crate::controllers::render::session::WorkerExit;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Rendering,
}

#[derive(Debug)]
pub enum StartOutcome {
    Started { session_id: u64 },
    /// A session is already in flight; nothing was allocated.
    AlreadyRendering,
    Rejected(StartError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StopOutcome {
    Stopped { session_id: u64, exit: WorkerExit },
    NotRendering,
}

#[derive(Debug)]
pub enum StartError {
    Viewport(ViewportError),
    ColourMap(ColourMapError),
    Spawn(std::io::Error),
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Spawn(err) => write!(f, "failed to spawn render worker: {}", err),
        }
    }
}

impl Error for StartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::Spawn(err) => Some(err),
        }
    }
}

impl From<ViewportError> for StartError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ColourMapError> for StartError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<std::io::Error> for StartError {
    fn from(err: std::io::Error) -> Self {
        Self::Spawn(err)
    }
}
