use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::cache::ColourCache;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use std::error::Error;
use std::fmt;

/// Error type for a render pass.
///
/// `Cancelled` is expected control flow rather than a failure: it records the
/// first pixel that was not computed, and the frame buffer keeps everything
/// written before it.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPassError {
    Cancelled { at: Point },
    Viewport(ViewportError),
    FrameBuffer(FrameBufferError),
}

impl fmt::Display for RenderPassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled { at } => {
                write!(f, "operation cancelled at x={}, y={}", at.x, at.y)
            }
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
        }
    }
}

impl Error for RenderPassError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled { .. } => None,
            Self::Viewport(err) => Some(err),
            Self::FrameBuffer(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderPassError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<FrameBufferError> for RenderPassError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

/// Renders a whole frame without cancellation.
///
/// For cancel-aware rendering into a shared buffer, use
/// [`render_pass_cancelable`].
pub fn render_pass(viewport: &Viewport, colours: &ColourCache) -> Result<FrameBuffer, RenderPassError> {
    let frame = FrameBuffer::new(viewport.width(), viewport.height());

    render_pass_cancelable(viewport, colours, &frame, &NeverCancel)?;

    Ok(frame)
}

/// Fills `frame` in raster order, one escape-time evaluation per pixel.
///
/// `cancel` is checked before every pixel, so a stop request costs at most
/// one pixel's worth of iterations. Progress is published after each pixel
/// so readers can tell how much of the frame is final.
pub fn render_pass_cancelable<C: CancelToken>(
    viewport: &Viewport,
    colours: &ColourCache,
    frame: &FrameBuffer,
    cancel: &C,
) -> Result<(), RenderPassError> {
    if frame.width() != viewport.width() || frame.height() != viewport.height() {
        return Err(RenderPassError::FrameBuffer(
            FrameBufferError::BoundsMismatch {
                expected_size: viewport.pixel_count() * 3,
                buffer_size: frame.buffer_size(),
            },
        ));
    }

    let max_iterations = colours.max_iterations();
    let mut written = 0;

    for y in 0..viewport.height() {
        for x in 0..viewport.width() {
            let pixel = Point { x, y };

            if cancel.is_cancelled() {
                return Err(RenderPassError::Cancelled { at: pixel });
            }

            let c = viewport.pixel_to_complex(pixel)?;
            let iterations = escape_time(c, max_iterations);

            frame.set_pixel(pixel, colours.colour_for(iterations))?;

            written += 1;
            frame.publish_progress(written);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
    use crate::core::fractals::mandelbrot::colour_mapping::map::ColourMap;
    use crate::core::fractals::mandelbrot::colour_mapping::maps::smooth::MandelbrotSmooth;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn default_viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height, Complex::new(-2.0, -1.25), 2.5).unwrap()
    }

    fn smooth_cache(max_iterations: u32) -> ColourCache {
        let map = mandelbrot_colour_map_factory(ColourAlgorithm::Smooth, max_iterations, Colour::BLACK);
        ColourCache::build(map.as_ref(), max_iterations).unwrap()
    }

    #[test]
    fn test_center_pixel_is_inside_the_set() {
        let frame = render_pass(&default_viewport(100, 100), &smooth_cache(50)).unwrap();

        assert_eq!(frame.pixel(Point { x: 50, y: 50 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_top_left_pixel_matches_smooth_formula() {
        let frame = render_pass(&default_viewport(100, 100), &smooth_cache(50)).unwrap();
        let iterations = escape_time(Complex::new(-2.0, -1.25), 50);
        let expected = MandelbrotSmooth::new(50, Colour::BLACK)
            .map(iterations)
            .unwrap();
        let colour = frame.pixel(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(colour, expected);
        assert_ne!(colour, Colour::BLACK);
    }

    #[test]
    fn test_completes_every_pixel() {
        let frame = render_pass(&default_viewport(16, 9), &smooth_cache(20)).unwrap();

        assert_eq!(frame.pixels_written(), 16 * 9);
        assert!(frame.snapshot().is_complete());
    }

    #[test]
    fn test_identical_parameters_give_identical_frames() {
        let viewport = default_viewport(64, 48);
        let first = render_pass(&viewport, &smooth_cache(255)).unwrap().snapshot();
        let second = render_pass(&viewport, &smooth_cache(255)).unwrap().snapshot();

        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_cancelled_before_start_leaves_frame_white() {
        let viewport = default_viewport(4, 4);
        let frame = FrameBuffer::new(4, 4);
        let cancel = || true;

        let result = render_pass_cancelable(&viewport, &smooth_cache(10), &frame, &cancel);

        assert_eq!(
            result,
            Err(RenderPassError::Cancelled {
                at: Point { x: 0, y: 0 }
            })
        );
        assert!(frame.snapshot().data().iter().all(|&b| b == 255));
        assert_eq!(frame.pixels_written(), 0);
    }

    #[test]
    fn test_cancellation_is_checked_per_pixel() {
        let viewport = default_viewport(4, 4);
        let frame = FrameBuffer::new(4, 4);
        let checks = AtomicUsize::new(0);
        // cancel on the sixth check: pixels 0..5 are written, (1, 1) is not
        let cancel = || checks.fetch_add(1, Ordering::Relaxed) >= 5;

        let result = render_pass_cancelable(&viewport, &smooth_cache(10), &frame, &cancel);

        assert_eq!(
            result,
            Err(RenderPassError::Cancelled {
                at: Point { x: 1, y: 1 }
            })
        );
        assert_eq!(frame.pixels_written(), 5);

        let reference = render_pass(&viewport, &smooth_cache(10)).unwrap().snapshot();
        let partial = frame.snapshot();
        assert_eq!(&partial.data()[..15], &reference.data()[..15]);
        assert!(partial.data()[15..].iter().all(|&b| b == 255));
    }

    #[test]
    fn test_mismatched_frame_is_rejected() {
        let frame = FrameBuffer::new(3, 3);
        let result = render_pass_cancelable(
            &default_viewport(4, 4),
            &smooth_cache(10),
            &frame,
            &NeverCancel,
        );

        assert_eq!(
            result,
            Err(RenderPassError::FrameBuffer(FrameBufferError::BoundsMismatch {
                expected_size: 48,
                buffer_size: 27
            }))
        );
    }

    #[test]
    fn test_cancelled_error_displays_position() {
        let err = RenderPassError::Cancelled {
            at: Point { x: 3, y: 7 },
        };

        assert_eq!(format!("{}", err), "operation cancelled at x=3, y=7");
    }
}
