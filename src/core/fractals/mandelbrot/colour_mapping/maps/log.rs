use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::{ColourMap, check_iterations};

/// Greyscale proportional to `ln(iterations + 1) / ln(max_iterations)`.
///
/// With `max_iterations <= 1` the logarithm base is degenerate and every
/// value maps to the mandel colour.
#[derive(Debug)]
pub struct MandelbrotLog {
    max_iterations: u32,
    mandel_colour: Colour,
    ln_max: Option<f64>,
}

impl MandelbrotLog {
    #[must_use]
    pub fn new(max_iterations: u32, mandel_colour: Colour) -> Self {
        let ln_max = (max_iterations > 1).then(|| f64::from(max_iterations).ln());

        Self {
            max_iterations,
            mandel_colour,
            ln_max,
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.ln_max.is_none()
    }
}

impl ColourMap for MandelbrotLog {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_iterations(iterations, self.max_iterations)?;

        let Some(ln_max) = self.ln_max else {
            return Ok(self.mandel_colour);
        };

        if iterations == self.max_iterations {
            return Ok(self.mandel_colour);
        }

        let value = (255.0 * f64::from(iterations + 1).ln() / ln_max)
            .floor()
            .min(255.0);

        Ok(Colour::grey(value as u8))
    }

    fn kind(&self) -> ColourAlgorithm {
        ColourAlgorithm::Log
    }
}
