use crate::config::errors::ConfigError;
use crate::config::store::{ConfigStore, keys};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::cache::ColourCache;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;
use serde_json::Value;

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;
pub const DEFAULT_MIN_C_REAL: f64 = -2.0;
pub const DEFAULT_MIN_C_IMAG: f64 = -1.25;
pub const DEFAULT_Z_SIZE: f64 = 2.5;

/// Substituted for non-positive `max_iter` values.
pub const MIN_MAX_ITERATIONS: u32 = 2;
/// Upper bound on `max_iter`; the colour cache holds one entry per value.
pub const MAX_MAX_ITERATIONS: u32 = 1 << 20;

/// Typed parameters of one render session, resolved from a [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub max_iterations: u32,
    pub origin: Complex,
    pub z_size: f64,
    pub mandel_colour: Colour,
    pub algorithm: ColourAlgorithm,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            origin: Complex::new(DEFAULT_MIN_C_REAL, DEFAULT_MIN_C_IMAG),
            z_size: DEFAULT_Z_SIZE,
            mandel_colour: Colour::BLACK,
            algorithm: ColourAlgorithm::default(),
        }
    }
}

impl RenderSettings {
    /// Resolves every key, substituting defaults for missing values and
    /// safe fallbacks for malformed ones. The returned warnings describe
    /// each substitution that was not a plain missing key.
    #[must_use]
    pub fn from_store(store: &ConfigStore) -> (Self, Vec<ConfigError>) {
        let mut warnings = Vec::new();

        let max_iterations = read_max_iterations(store, &mut warnings);
        let min_c_real = read_finite(store, keys::MIN_C_REAL, DEFAULT_MIN_C_REAL, &mut warnings);
        let min_c_imag = read_finite(store, keys::MIN_C_IMAG, DEFAULT_MIN_C_IMAG, &mut warnings);
        let z_size = read_z_size(store, &mut warnings);
        let mandel_colour = read_mandel_colour(store, &mut warnings);
        let mut algorithm = read_algorithm(store, &mut warnings);

        if algorithm == ColourAlgorithm::Log && max_iterations <= 1 {
            warnings.push(ConfigError::DegenerateLogBase { max_iterations });
            algorithm = ColourAlgorithm::Flat;
        }

        let settings = Self {
            max_iterations,
            origin: Complex::new(min_c_real, min_c_imag),
            z_size,
            mandel_colour,
            algorithm,
        };

        (settings, warnings)
    }

    pub fn viewport(&self, width: u32, height: u32) -> Result<Viewport, ViewportError> {
        Viewport::new(width, height, self.origin, self.z_size)
    }

    pub fn colour_cache(&self) -> Result<ColourCache, ColourMapError> {
        let map =
            mandelbrot_colour_map_factory(self.algorithm, self.max_iterations, self.mandel_colour);

        ColourCache::build(map.as_ref(), self.max_iterations)
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0 && float.abs() < i64::MAX as f64)
                    .map(|float| float as i64)
            }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn malformed(key: &str, value: &Value, fallback: impl ToString) -> ConfigError {
    ConfigError::Malformed {
        key: key.to_string(),
        value: value.to_string(),
        fallback: fallback.to_string(),
    }
}

fn out_of_range(key: &str, value: &Value, fallback: impl ToString) -> ConfigError {
    ConfigError::OutOfRange {
        key: key.to_string(),
        value: value.to_string(),
        fallback: fallback.to_string(),
    }
}

fn read_max_iterations(store: &ConfigStore, warnings: &mut Vec<ConfigError>) -> u32 {
    let Some(value) = store.get(keys::MAX_ITER) else {
        return DEFAULT_MAX_ITERATIONS;
    };

    match as_i64(value) {
        None => {
            warnings.push(malformed(keys::MAX_ITER, value, DEFAULT_MAX_ITERATIONS));
            DEFAULT_MAX_ITERATIONS
        }
        Some(n) if n < 1 => {
            warnings.push(out_of_range(keys::MAX_ITER, value, MIN_MAX_ITERATIONS));
            MIN_MAX_ITERATIONS
        }
        Some(n) if n > i64::from(MAX_MAX_ITERATIONS) => {
            warnings.push(out_of_range(keys::MAX_ITER, value, MAX_MAX_ITERATIONS));
            MAX_MAX_ITERATIONS
        }
        Some(n) => n as u32,
    }
}

fn read_finite(
    store: &ConfigStore,
    key: &str,
    default: f64,
    warnings: &mut Vec<ConfigError>,
) -> f64 {
    let Some(value) = store.get(key) else {
        return default;
    };

    match as_f64(value) {
        Some(number) if number.is_finite() => number,
        _ => {
            warnings.push(malformed(key, value, default));
            default
        }
    }
}

fn read_z_size(store: &ConfigStore, warnings: &mut Vec<ConfigError>) -> f64 {
    let z_size = read_finite(store, keys::Z_SIZE, DEFAULT_Z_SIZE, warnings);

    if z_size <= 0.0 {
        if let Some(value) = store.get(keys::Z_SIZE) {
            warnings.push(out_of_range(keys::Z_SIZE, value, DEFAULT_Z_SIZE));
        }
        return DEFAULT_Z_SIZE;
    }

    z_size
}

fn read_mandel_colour(store: &ConfigStore, warnings: &mut Vec<ConfigError>) -> Colour {
    let Some(value) = store.get(keys::MANDEL_COLOR) else {
        return Colour::BLACK;
    };

    let parsed = match value {
        Value::String(text) => text.parse::<Colour>().ok(),
        structured => serde_json::from_value(structured.clone()).ok(),
    };

    parsed.unwrap_or_else(|| {
        warnings.push(malformed(keys::MANDEL_COLOR, value, Colour::BLACK));
        Colour::BLACK
    })
}

fn read_algorithm(store: &ConfigStore, warnings: &mut Vec<ConfigError>) -> ColourAlgorithm {
    let Some(value) = store.get(keys::ALGORITHM) else {
        return ColourAlgorithm::default();
    };

    value
        .as_str()
        .and_then(ColourAlgorithm::from_config_name)
        .unwrap_or_else(|| {
            warnings.push(ConfigError::UnknownAlgorithm {
                value: value.to_string(),
            });
            ColourAlgorithm::Flat
        })
}
