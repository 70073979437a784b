use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::ColourMap;

/// Lookup table of a colour map over `0..=max_iterations`.
///
/// Built once per render session so the per-pixel cost is one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourCache {
    kind: ColourAlgorithm,
    colours: Box<[Colour]>,
}

impl ColourCache {
    pub fn build(map: &dyn ColourMap, max_iterations: u32) -> Result<Self, ColourMapError> {
        let colours = (0..=max_iterations)
            .map(|iterations| map.map(iterations))
            .collect::<Result<Box<[Colour]>, _>>()?;

        Ok(Self {
            kind: map.kind(),
            colours,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ColourAlgorithm {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        (self.colours.len() - 1) as u32
    }

    /// Values past the end clamp to the `max_iterations` entry.
    #[inline]
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Colour {
        let index = (iterations as usize).min(self.colours.len() - 1);

        self.colours[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingMap {
        calls: AtomicUsize,
    }

    impl ColourMap for CountingMap {
        fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(Colour::grey(iterations as u8))
        }

        fn kind(&self) -> ColourAlgorithm {
            ColourAlgorithm::Flat
        }
    }

    #[derive(Debug)]
    struct FailingMap;

    impl ColourMap for FailingMap {
        fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: 0,
            })
        }

        fn kind(&self) -> ColourAlgorithm {
            ColourAlgorithm::Flat
        }
    }

    #[test]
    fn test_has_one_entry_per_iteration_value() {
        let map = CountingMap::default();
        let cache = ColourCache::build(&map, 255).unwrap();

        assert_eq!(cache.len(), 256);
        assert_eq!(cache.max_iterations(), 255);
        assert_eq!(map.calls.load(Ordering::Relaxed), 256);
    }

    #[test]
    fn test_lookups_do_not_call_the_map() {
        let map = CountingMap::default();
        let cache = ColourCache::build(&map, 10).unwrap();

        for _ in 0..1000 {
            let _ = cache.colour_for(7);
        }

        assert_eq!(map.calls.load(Ordering::Relaxed), 11);
        assert_eq!(cache.colour_for(7), Colour::grey(7));
    }

    #[test]
    fn test_matches_the_map_for_every_value() {
        let colour = Colour::new(10, 20, 30);

        for &kind in ColourAlgorithm::ALL {
            let map = mandelbrot_colour_map_factory(kind, 300, colour);
            let cache = ColourCache::build(map.as_ref(), 300).unwrap();

            assert_eq!(cache.kind(), kind);
            for iterations in 0..=300 {
                assert_eq!(cache.colour_for(iterations), map.map(iterations).unwrap());
            }
        }
    }

    #[test]
    fn test_out_of_range_lookup_clamps() {
        let map = mandelbrot_colour_map_factory(ColourAlgorithm::Smooth, 5, Colour::BLACK);
        let cache = ColourCache::build(map.as_ref(), 5).unwrap();

        assert_eq!(cache.colour_for(500), Colour::BLACK);
    }

    #[test]
    fn test_propagates_map_failure() {
        assert!(ColourCache::build(&FailingMap, 3).is_err());
    }
}
