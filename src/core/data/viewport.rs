use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
    InvalidExtent { extent_real: f64 },
    InvalidOrigin { origin: Complex },
    PointOutsideViewport { point: Point, width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::InvalidExtent { extent_real } => {
                write!(
                    f,
                    "viewport real extent must be positive and finite: {}",
                    extent_real
                )
            }
            Self::InvalidOrigin { origin } => {
                write!(
                    f,
                    "viewport origin must be finite: {} + {}i",
                    origin.real, origin.imag
                )
            }
            Self::PointOutsideViewport {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} viewport",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane sampled by one render pass, mapped 1:1
/// onto a `width` x `height` pixel grid.
///
/// `origin` is the minimum corner (min real, min imaginary), which lands on
/// pixel (0, 0). The imaginary extent is the real extent scaled by the
/// aspect ratio, `width / height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    origin: Complex,
    extent_real: f64,
}

impl Viewport {
    pub fn new(
        width: u32,
        height: u32,
        origin: Complex,
        extent_real: f64,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if !extent_real.is_finite() || extent_real <= 0.0 {
            return Err(ViewportError::InvalidExtent { extent_real });
        }

        if !origin.is_finite() {
            return Err(ViewportError::InvalidOrigin { origin });
        }

        Ok(Self {
            width,
            height,
            origin,
            extent_real,
        })
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
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn extent_real(&self) -> f64 {
        self.extent_real
    }

    #[must_use]
    pub fn extent_imag(&self) -> f64 {
        self.extent_real * f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn pixel_to_complex(&self, point: Point) -> Result<Complex, ViewportError> {
        if !self.contains_point(point) {
            return Err(ViewportError::PointOutsideViewport {
                point,
                width: self.width,
                height: self.height,
            });
        }

        let real =
            self.origin.real + self.extent_real * f64::from(point.x) / f64::from(self.width);
        let imag =
            self.origin.imag + self.extent_imag() * f64::from(point.y) / f64::from(self.height);

        Ok(Complex { real, imag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height, Complex::new(-2.0, -1.25), 2.5).unwrap()
    }

    #[test]
    fn test_top_left_pixel_maps_to_origin() {
        let viewport = default_viewport(100, 100);
        let c = viewport.pixel_to_complex(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(c, Complex::new(-2.0, -1.25));
    }

    #[test]
    fn test_center_pixel_of_default_window() {
        let viewport = default_viewport(100, 100);
        let c = viewport.pixel_to_complex(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(c, Complex::new(-0.75, 0.0));
    }

    #[test]
    fn test_last_pixel_stops_one_step_short_of_extent() {
        let viewport = default_viewport(10, 10);
        let c = viewport.pixel_to_complex(Point { x: 9, y: 9 }).unwrap();

        assert!((c.real - 0.25).abs() < 1e-12);
        assert!((c.imag - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_imaginary_extent_follows_aspect_ratio() {
        let wide = default_viewport(200, 100);
        let tall = default_viewport(100, 200);

        assert_eq!(wide.extent_imag(), 5.0);
        assert_eq!(tall.extent_imag(), 1.25);
        assert_eq!(default_viewport(100, 100).extent_imag(), 2.5);

        let c = wide.pixel_to_complex(Point { x: 100, y: 50 }).unwrap();
        assert_eq!(c, Complex::new(-0.75, 1.25));
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(default_viewport(640, 480).pixel_count(), 307_200);
    }

    #[test]
    fn test_point_outside_viewport_fails() {
        let viewport = default_viewport(4, 3);
        let point = Point { x: 4, y: 0 };

        assert_eq!(
            viewport.pixel_to_complex(point),
            Err(ViewportError::PointOutsideViewport {
                point,
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            Viewport::new(0, 10, Complex::ZERO, 1.0),
            Err(ViewportError::InvalidSize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_non_positive_extent_is_rejected() {
        assert!(matches!(
            Viewport::new(10, 10, Complex::ZERO, 0.0),
            Err(ViewportError::InvalidExtent { .. })
        ));
        assert!(matches!(
            Viewport::new(10, 10, Complex::ZERO, -2.5),
            Err(ViewportError::InvalidExtent { .. })
        ));
        assert!(matches!(
            Viewport::new(10, 10, Complex::ZERO, f64::NAN),
            Err(ViewportError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn test_non_finite_origin_is_rejected() {
        assert!(matches!(
            Viewport::new(10, 10, Complex::new(f64::INFINITY, 0.0), 1.0),
            Err(ViewportError::InvalidOrigin { .. })
        ));
    }
}
