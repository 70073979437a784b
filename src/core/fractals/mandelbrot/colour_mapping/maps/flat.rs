use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::{ColourMap, check_iterations};

#[derive(Debug)]
pub struct MandelbrotFlat {
    max_iterations: u32,
    mandel_colour: Colour,
}

impl MandelbrotFlat {
    #[must_use]
    pub fn new(max_iterations: u32, mandel_colour: Colour) -> Self {
        Self {
            max_iterations,
            mandel_colour,
        }
    }
}

impl ColourMap for MandelbrotFlat {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_iterations(iterations, self.max_iterations)?;

        Ok(self.mandel_colour)
    }

    fn kind(&self) -> ColourAlgorithm {
        ColourAlgorithm::Flat
    }
}
