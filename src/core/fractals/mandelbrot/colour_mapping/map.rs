use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use std::fmt::Debug;

/// Translates an escape-time iteration count into a colour.
pub trait ColourMap: Debug + Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError>;

    fn kind(&self) -> ColourAlgorithm;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

pub(crate) fn check_iterations(iterations: u32, max_iterations: u32) -> Result<(), ColourMapError> {
    if iterations > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(())
}
