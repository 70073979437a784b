use crate::controllers::render::ports::display_surface::DisplaySurface;
use crate::core::data::frame_buffer::FrameSnapshot;
use crate::input::gui::events::GuiEvent;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Display surface handed to the render controller. Frames are parked here
/// and the event loop is woken to draw them on the window thread.
pub struct PixelsAdapter {
    width: AtomicU32,
    height: AtomicU32,
    frame: Mutex<Option<FrameSnapshot>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl DisplaySurface for PixelsAdapter {
    fn size(&self) -> (u32, u32) {
        (
            self.width.load(Ordering::Relaxed),
            self.height.load(Ordering::Relaxed),
        )
    }

    fn present(&self, frame: &FrameSnapshot) {
        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame.clone());
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(width: u32, height: u32, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            width: AtomicU32::new(width),
            height: AtomicU32::new(height),
            frame: Mutex::new(None),
            event_loop_proxy,
        }
    }

    /// Size used by the next render session.
    pub fn set_size(&self, width: u32, height: u32) {
        self.width.store(width, Ordering::Relaxed);
        self.height.store(height, Ordering::Relaxed);
    }

    pub fn take_frame(&self) -> Option<FrameSnapshot> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
