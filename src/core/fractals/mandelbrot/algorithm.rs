use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Squared escape radius; once |z|² reaches it the orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Returned by [`escape_time`] for points that stay bounded for the whole budget.
pub const NO_ESCAPE: u32 = 0;

/// Iterates `z ← z² + c` from `z = 0` for at most `max_iterations` steps.
///
/// Returns the step (in `1..=max_iterations`) at which |z|² first reached the
/// escape radius, or [`NO_ESCAPE`] if it never did. The first step is always
/// taken before any check, so an escaping point can never report 0.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ORIGIN;

    for iteration in 1..=max_iterations {
        z = z * z + c;
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    NO_ESCAPE
}

/// Per-pixel escape-time evaluation over a fixed viewport snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.viewport)?;
        Ok(escape_time(c, self.viewport.max_iterations()))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 30, 1000] {
            assert_eq!(escape_time(Complex::ORIGIN, max_iterations), NO_ESCAPE);
        }
    }

    #[test]
    fn test_far_point_escapes_on_first_step() {
        for max_iterations in [1, 2, 30, 1000] {
            assert_eq!(escape_time(Complex::new(10.0, 10.0), max_iterations), 1);
        }
    }

    #[test]
    fn test_escaping_point_never_reports_zero() {
        // |c|² = 4 exactly: escapes on the first step even with a budget of one.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 1), 1);
        assert_eq!(escape_time(Complex::new(0.0, -2.0), 1), 1);
    }

    #[test]
    fn test_escape_on_last_allowed_step_is_counted() {
        // c = 1: z = 1, 2, 5 → |z|² reaches 4 on step 2
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 2), 2);
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 1), NO_ESCAPE);
    }

    #[test]
    fn test_known_escape_counts() {
        // c = -1 - i: |z|² runs 2, 2, 10
        assert_eq!(escape_time(Complex::new(-1.0, -1.0), 30), 3);
        // c = 1 + i: |z|² runs 2, 10
        assert_eq!(escape_time(Complex::new(1.0, 1.0), 30), 2);
    }

    #[test]
    fn test_bounded_cycles_do_not_escape() {
        // c = -1 cycles 0, -1, 0, ...; c = -i cycles -1 - i, i, -1 - i, ...
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 500), NO_ESCAPE);
        assert_eq!(escape_time(Complex::new(0.0, -1.0), 500), NO_ESCAPE);
    }

    #[test]
    fn test_result_is_within_budget() {
        for step in 0..50 {
            let c = Complex::new(-2.0 + step as f64 * 0.06, 0.3);
            for max_iterations in [1, 5, 64] {
                assert!(escape_time(c, max_iterations) <= max_iterations);
            }
        }
    }

    #[test]
    fn test_compute_uses_viewport_mapping() {
        let viewport =
            Viewport::new(Complex::ORIGIN, 2.0, 30, CanvasSize::new(4, 4).unwrap()).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport);

        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), Ok(NO_ESCAPE));
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(1));
        assert!(algorithm.compute(Point { x: 4, y: 0 }).is_err());
    }
}
