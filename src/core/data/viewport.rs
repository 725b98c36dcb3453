use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonPositiveHalfExtent(f64),
    NonFiniteCenter(Complex),
    ZeroMaxIterations,
    IterationsOverflow,
    /// The plane ranges, or the per-pixel mapping over them, leave the `f64` range.
    ExtentOverflow(f64),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveHalfExtent(half_extent) => {
                write!(f, "half extent must be finite and positive: {}", half_extent)
            }
            Self::NonFiniteCenter(center) => {
                write!(
                    f,
                    "view center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::IterationsOverflow => {
                write!(f, "Maximum iterations cannot be increased any further")
            }
            Self::ExtentOverflow(half_extent) => {
                write!(
                    f,
                    "half extent {} spans more of the plane than f64 can represent",
                    half_extent
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane mapped onto the canvas.
///
/// The vertical extent is `center.imag ± half_extent`; the horizontal extent is
/// widened by the canvas aspect ratio so pixels stay square. Every setter
/// validates the resulting view as a whole: both ranges, their widths and
/// the pixel mapping over them stay finite, so a `Viewport` can always be
/// rendered without producing NaN or infinite coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    half_extent: f64,
    max_iterations: u32,
    canvas: CanvasSize,
}

impl Viewport {
    pub fn new(
        center: Complex,
        half_extent: f64,
        max_iterations: u32,
        canvas: CanvasSize,
    ) -> Result<Self, ViewportError> {
        validate_center(center)?;
        validate_half_extent(half_extent)?;
        validate_max_iterations(max_iterations)?;

        let viewport = Self {
            center,
            half_extent,
            max_iterations,
            canvas,
        };
        validate_extent(&viewport)?;

        Ok(viewport)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn set_center(&mut self, center: Complex) -> Result<(), ViewportError> {
        validate_center(center)?;
        self.replace_if_renderable(Self { center, ..*self })
    }

    pub fn set_half_extent(&mut self, half_extent: f64) -> Result<(), ViewportError> {
        validate_half_extent(half_extent)?;
        self.replace_if_renderable(Self {
            half_extent,
            ..*self
        })
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ViewportError> {
        validate_max_iterations(max_iterations)?;
        self.max_iterations = max_iterations;
        Ok(())
    }

    /// A wider canvas widens the real range, so this can fail on very
    /// zoomed-out views.
    pub fn set_canvas(&mut self, canvas: CanvasSize) -> Result<(), ViewportError> {
        self.replace_if_renderable(Self { canvas, ..*self })
    }

    fn replace_if_renderable(&mut self, candidate: Self) -> Result<(), ViewportError> {
        validate_extent(&candidate)?;
        *self = candidate;
        Ok(())
    }

    /// Real-axis interval `[min, max]` covered by the canvas width.
    #[must_use]
    pub fn real_range(&self) -> (f64, f64) {
        let half_width = self.half_extent * self.canvas.aspect_ratio();
        (self.center.real - half_width, self.center.real + half_width)
    }

    /// Imaginary-axis interval `[min, max]` covered by the canvas height.
    #[must_use]
    pub fn imag_range(&self) -> (f64, f64) {
        (
            self.center.imag - self.half_extent,
            self.center.imag + self.half_extent,
        )
    }
}

fn validate_center(center: Complex) -> Result<(), ViewportError> {
    if !center.is_finite() {
        return Err(ViewportError::NonFiniteCenter(center));
    }
    Ok(())
}

fn validate_half_extent(half_extent: f64) -> Result<(), ViewportError> {
    if !half_extent.is_finite() || half_extent <= 0.0 {
        return Err(ViewportError::NonPositiveHalfExtent(half_extent));
    }
    Ok(())
}

/// Pixel mapping multiplies a pixel offset by the range width before
/// dividing by the canvas size, so `width * pixels` must stay finite too.
fn validate_extent(viewport: &Viewport) -> Result<(), ViewportError> {
    let canvas = viewport.canvas;
    let (real_min, real_max) = viewport.real_range();
    let (imag_min, imag_max) = viewport.imag_range();
    let real_span = (real_max - real_min) * f64::from(canvas.width());
    let imag_span = (imag_max - imag_min) * f64::from(canvas.height());

    let all_finite = [real_min, real_max, imag_min, imag_max, real_span, imag_span]
        .iter()
        .all(|value| value.is_finite());
    if !all_finite {
        return Err(ViewportError::ExtentOverflow(viewport.half_extent));
    }
    Ok(())
}

fn validate_max_iterations(max_iterations: u32) -> Result<(), ViewportError> {
    if max_iterations == 0 {
        return Err(ViewportError::ZeroMaxIterations);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_valid_viewport() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.25), 2.0, 30, canvas(640, 360)).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.25));
        assert_eq!(viewport.half_extent(), 2.0);
        assert_eq!(viewport.max_iterations(), 30);
        assert_eq!(viewport.canvas(), canvas(640, 360));
    }

    #[test]
    fn test_new_rejects_degenerate_inputs() {
        let size = canvas(10, 10);

        assert_eq!(
            Viewport::new(Complex::ORIGIN, 0.0, 30, size),
            Err(ViewportError::NonPositiveHalfExtent(0.0))
        );
        assert_eq!(
            Viewport::new(Complex::ORIGIN, -1.0, 30, size),
            Err(ViewportError::NonPositiveHalfExtent(-1.0))
        );
        assert!(matches!(
            Viewport::new(Complex::ORIGIN, f64::INFINITY, 30, size),
            Err(ViewportError::NonPositiveHalfExtent(_))
        ));
        assert!(matches!(
            Viewport::new(Complex::ORIGIN, f64::NAN, 30, size),
            Err(ViewportError::NonPositiveHalfExtent(_))
        ));
        assert_eq!(
            Viewport::new(Complex::ORIGIN, 2.0, 0, size),
            Err(ViewportError::ZeroMaxIterations)
        );
        assert!(matches!(
            Viewport::new(Complex::new(f64::NAN, 0.0), 2.0, 30, size),
            Err(ViewportError::NonFiniteCenter(_))
        ));
    }

    #[test]
    fn test_setters_leave_viewport_untouched_on_error() {
        let mut viewport = Viewport::new(Complex::ORIGIN, 2.0, 30, canvas(10, 10)).unwrap();
        let before = viewport;

        assert!(viewport.set_half_extent(0.0).is_err());
        assert!(viewport.set_max_iterations(0).is_err());
        assert!(viewport.set_center(Complex::new(0.0, f64::INFINITY)).is_err());

        assert_eq!(viewport, before);
    }

    #[test]
    fn test_ranges_are_aspect_corrected() {
        let viewport = Viewport::new(Complex::new(1.0, -1.0), 2.0, 30, canvas(200, 100)).unwrap();

        assert_eq!(viewport.real_range(), (-3.0, 5.0));
        assert_eq!(viewport.imag_range(), (-3.0, 1.0));
    }

    #[test]
    fn test_set_canvas_changes_real_range_only() {
        let mut viewport = Viewport::new(Complex::ORIGIN, 1.0, 30, canvas(100, 100)).unwrap();
        viewport.set_canvas(canvas(300, 100)).unwrap();

        assert_eq!(viewport.real_range(), (-3.0, 3.0));
        assert_eq!(viewport.imag_range(), (-1.0, 1.0));
    }

    #[test]
    fn test_new_rejects_ranges_that_overflow() {
        assert_eq!(
            Viewport::new(Complex::ORIGIN, 6e307, 30, canvas(640, 360)),
            Err(ViewportError::ExtentOverflow(6e307))
        );
        assert_eq!(
            Viewport::new(Complex::ORIGIN, f64::MAX, 30, canvas(4, 4)),
            Err(ViewportError::ExtentOverflow(f64::MAX))
        );
    }

    #[test]
    fn test_largest_accepted_view_maps_every_pixel_to_finite_coords() {
        let viewport = Viewport::new(Complex::ORIGIN, 7.8e304, 30, canvas(640, 360)).unwrap();
        let (real_min, real_max) = viewport.real_range();
        let (imag_min, imag_max) = viewport.imag_range();

        assert!((real_max - real_min).is_finite());
        assert!((imag_max - imag_min).is_finite());
        assert!(((real_max - real_min) * 639.0).is_finite());
        assert!(((imag_max - imag_min) * 359.0).is_finite());
    }

    #[test]
    fn test_set_center_rejects_ranges_past_f64_max() {
        let mut viewport = Viewport::new(Complex::ORIGIN, 1e300, 30, canvas(10, 10)).unwrap();
        let before = viewport;

        assert_eq!(
            viewport.set_center(Complex::new(f64::MAX, 0.0)),
            Err(ViewportError::ExtentOverflow(1e300))
        );
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_set_canvas_rejects_widening_an_extreme_view() {
        let mut viewport = Viewport::new(Complex::ORIGIN, 7.8e304, 30, canvas(360, 360)).unwrap();
        let before = viewport;

        assert_eq!(viewport.set_canvas(canvas(640, 360)), Ok(()));
        assert_eq!(
            viewport.set_canvas(canvas(1280, 360)),
            Err(ViewportError::ExtentOverflow(7.8e304))
        );
        assert_eq!(viewport, Viewport { canvas: canvas(640, 360), ..before });
    }
}
