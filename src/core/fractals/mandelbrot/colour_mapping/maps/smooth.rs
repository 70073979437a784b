use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::{ColourMap, check_iterations};

/// Banded colouring: each channel walks down from 255 at a different rate
/// and wraps modulo 256.
#[derive(Debug)]
pub struct MandelbrotSmooth {
    max_iterations: u32,
    mandel_colour: Colour,
}

impl MandelbrotSmooth {
    #[must_use]
    pub fn new(max_iterations: u32, mandel_colour: Colour) -> Self {
        Self {
            max_iterations,
            mandel_colour,
        }
    }
}

fn channel(iterations: u32, rate: i64) -> u8 {
    // rem_euclid keeps the result in 0..256 for any input
    (255 - i64::from(iterations) * rate).abs().rem_euclid(256) as u8
}

impl ColourMap for MandelbrotSmooth {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_iterations(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(self.mandel_colour);
        }

        Ok(Colour {
            r: channel(iterations, 1),
            g: channel(iterations, 4),
            b: channel(iterations, 8),
        })
    }

    fn kind(&self) -> ColourAlgorithm {
        ColourAlgorithm::Smooth
    }
}
