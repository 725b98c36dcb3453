use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::map_range::map_range;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideCanvas { point: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideCanvas { point, width, height } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} canvas",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the complex plane: x spans `[0, width)` onto the
/// aspect-corrected real range, y spans `[0, height)` onto the imaginary range.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let canvas = viewport.canvas();

    if !canvas.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideCanvas {
            point: pixel_position,
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    let (real_min, real_max) = viewport.real_range();
    let (imag_min, imag_max) = viewport.imag_range();

    let real = map_range(
        f64::from(pixel_position.x),
        0.0,
        f64::from(canvas.width()),
        real_min,
        real_max,
    );
    let imag = map_range(
        f64::from(pixel_position.y),
        0.0,
        f64::from(canvas.height()),
        imag_min,
        imag_max,
    );

    Ok(Complex { real, imag })
}
