use crate::core::data::complex::Complex;

/// |z| > 2, compared on the squared magnitude to skip the square root.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time of `c` under z ← z² + c, starting from z = c.
///
/// Returns the 0-based index of the iteration whose update pushed |z| past
/// 2, or `max_iterations` when the orbit stays bounded for the whole budget
/// (inside the set, or undecided).
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_far_outside_escapes_on_first_iteration() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 255), 0);
        assert_eq!(escape_time(Complex::new(0.0, -2.5), 10), 0);
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 50, 255, 1000] {
            assert_eq!(escape_time(Complex::ZERO, max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_period_two_point_never_escapes() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn test_center_of_default_window_is_bounded() {
        assert_eq!(escape_time(Complex::new(-0.75, 0.0), 50), 50);
    }

    #[test]
    fn test_top_left_of_default_window_escapes_immediately() {
        // z1 = 0.4375 + 3.75i
        assert_eq!(escape_time(Complex::new(-2.0, -1.25), 50), 0);
    }

    #[test]
    fn test_counts_iterations_before_escape() {
        // c = 1: z = 1 -> 2 -> 5, |5| > 2 on the second update
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 10), 1);
    }

    #[test]
    fn test_zero_budget_returns_zero() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 0), 0);
    }

    #[test]
    fn test_boundary_point_is_not_escaping() {
        // c = -2 stays at |z| = 2 forever, which is not > 2
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 100), 100);
    }
}
