use crate::controllers::render::ports::display_surface::DisplaySurface;
use crate::core::data::frame_buffer::FrameSnapshot;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use log::warn;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Owns the `pixels` surface of the window and draws the latest frame
/// parked in its [`PixelsAdapter`].
///
/// The pixel buffer follows the size of the frame being shown; `pixels`
/// scales it onto the window surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    buffer_width: u32,
    buffer_height: u32,
    has_frame: bool,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(size.width, size.height, event_loop_proxy)),
            buffer_width: size.width,
            buffer_height: size.height,
            has_frame: false,
        })
    }

    #[must_use]
    pub fn share_surface(&self) -> Arc<dyn DisplaySurface> {
        Arc::clone(&self.adapter) as Arc<dyn DisplaySurface>
    }

    /// Draws a pending frame, if any. Returns whether a redraw is needed.
    pub fn update(&mut self) -> Result<bool, TextureError> {
        let Some(frame) = self.adapter.take_frame() else {
            return Ok(false);
        };

        self.draw_frame(&frame)?;
        Ok(true)
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()
    }

    /// Resizes the window surface. The next session renders at this size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.adapter.set_size(width, height);
        self.pixels.resize_surface(width, height)
    }

    fn draw_frame(&mut self, frame: &FrameSnapshot) -> Result<(), TextureError> {
        if frame.width() != self.buffer_width || frame.height() != self.buffer_height {
            self.pixels.resize_buffer(frame.width(), frame.height())?;
            self.buffer_width = frame.width();
            self.buffer_height = frame.height();
        }

        if let Err(err) = frame.copy_into_rgba(self.pixels.frame_mut()) {
            warn!("dropping frame: {}", err);
            return Ok(());
        }

        self.has_frame = true;
        Ok(())
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[u8::MAX; 4]);
        }
    }
}
