use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    flat::MandelbrotFlat, log::MandelbrotLog, smooth::MandelbrotSmooth,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: ColourAlgorithm,
    max_iterations: u32,
    mandel_colour: Colour,
) -> Box<dyn ColourMap> {
    match kind {
        ColourAlgorithm::Smooth => Box::new(MandelbrotSmooth::new(max_iterations, mandel_colour)),
        ColourAlgorithm::Log => Box::new(MandelbrotLog::new(max_iterations, mandel_colour)),
        ColourAlgorithm::Flat => Box::new(MandelbrotFlat::new(max_iterations, mandel_colour)),
    }
}
