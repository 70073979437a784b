use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame buffer",
                    pixel.x, pixel.y, width, height
                )
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected buffer size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major RGB plane shared between one writer and any number of readers.
///
/// Every byte is an independent atomic, so the render worker can store
/// pixels while the presenter copies the plane out without a lock. Readers
/// may observe a torn frame (fresh rows followed by white ones); that is the
/// progressive-rendering view, not corruption.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    bytes: Box<[AtomicU8]>,
    pixels_written: AtomicUsize,
}

impl FrameBuffer {
    /// Allocates a white frame.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let bytes = (0..buffer_size(width, height))
            .map(|_| AtomicU8::new(u8::MAX))
            .collect();

        Self {
            width,
            height,
            bytes,
            pixels_written: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.bytes.len()
    }

    pub fn set_pixel(&self, pixel: Point, colour: Colour) -> Result<(), FrameBufferError> {
        let index = self.byte_index(pixel)?;

        self.bytes[index].store(colour.r, Ordering::Relaxed);
        self.bytes[index + 1].store(colour.g, Ordering::Relaxed);
        self.bytes[index + 2].store(colour.b, Ordering::Relaxed);

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, FrameBufferError> {
        let index = self.byte_index(pixel)?;

        Ok(Colour {
            r: self.bytes[index].load(Ordering::Relaxed),
            g: self.bytes[index + 1].load(Ordering::Relaxed),
            b: self.bytes[index + 2].load(Ordering::Relaxed),
        })
    }

    /// Publishes how many pixels, in raster order, are final.
    ///
    /// Release pairs with the acquire in [`Self::pixels_written`], so a
    /// reader that sees `n` also sees the bytes of the first `n` pixels.
    pub fn publish_progress(&self, pixels: usize) {
        self.pixels_written
            .store(pixels.min(self.pixel_count()), Ordering::Release);
    }

    #[must_use]
    pub fn pixels_written(&self) -> usize {
        self.pixels_written.load(Ordering::Acquire)
    }

    /// Copies the current contents out. Progress is read first so the
    /// snapshot never claims more finished pixels than it contains.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        let pixels_written = self.pixels_written();
        let data = self
            .bytes
            .iter()
            .map(|byte| byte.load(Ordering::Relaxed))
            .collect();

        FrameSnapshot {
            width: self.width,
            height: self.height,
            pixels_written,
            data,
        }
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, FrameBufferError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

/// A point-in-time copy of a [`FrameBuffer`], handed to display surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    width: u32,
    height: u32,
    pixels_written: usize,
    data: Vec<u8>,
}

impl FrameSnapshot {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn pixels_written(&self) -> usize {
        self.pixels_written
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pixels_written == self.width as usize * self.height as usize
    }

    /// Fraction of pixels finished, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.width as usize * self.height as usize;

        if total == 0 {
            return 1.0;
        }

        self.pixels_written as f64 / total as f64
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        let index = (pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    /// Expands the RGB plane into an RGBA destination with opaque alpha.
    pub fn copy_into_rgba(&self, dest: &mut [u8]) -> Result<(), FrameBufferError> {
        let expected_size = self.width as usize * self.height as usize * 4;

        if dest.len() != expected_size {
            return Err(FrameBufferError::BoundsMismatch {
                expected_size,
                buffer_size: dest.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .data
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dest.chunks_exact_mut(4))
        {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = u8::MAX;
        }

        Ok(())
    }
}
