use crate::controllers::render::ports::display_surface::DisplaySurface;
use crate::core::data::frame_buffer::FrameSnapshot;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Headless display surface of fixed size.
///
/// Keeps the most recent frame so a caller can inspect or persist it once
/// rendering has ended.
#[derive(Debug)]
pub struct LogSurface {
    width: u32,
    height: u32,
    frames_presented: AtomicU64,
    last_frame: Mutex<Option<FrameSnapshot>>,
}

impl LogSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames_presented: AtomicU64::new(0),
            last_frame: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<FrameSnapshot> {
        self.last_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DisplaySurface for LogSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&self, frame: &FrameSnapshot) {
        let presented = self.frames_presented.fetch_add(1, Ordering::Relaxed) + 1;

        debug!(
            "frame {}: {}/{} pixels ({:.1}%)",
            presented,
            frame.pixels_written(),
            frame.width() as usize * frame.height() as usize,
            frame.progress() * 100.0
        );

        *self
            .last_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(frame.clone());
    }
}
