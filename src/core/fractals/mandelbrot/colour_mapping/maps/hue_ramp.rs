use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::NO_ESCAPE;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::util::hsl_to_rgb::hsl_to_rgb;
use std::error::Error;

pub const HUE_RAMP_SATURATION: f64 = 0.7;
pub const HUE_RAMP_LIGHTNESS: f64 = 0.6;

/// Colour of points that never escaped.
pub const HUE_RAMP_NO_ESCAPE_COLOUR: Colour = Colour::BLACK;

/// Spreads escape counts around the colour wheel on a log scale, so the many
/// low counts near the outside of the set get most of the hue range.
#[derive(Debug)]
pub struct MandelbrotHueRamp {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotHueRamp {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotColourMapErrors::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        if iterations == NO_ESCAPE {
            return Ok(HUE_RAMP_NO_ESCAPE_COLOUR);
        }

        Ok(hsl_to_rgb(
            self.hue(iterations),
            HUE_RAMP_SATURATION,
            HUE_RAMP_LIGHTNESS,
        ))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotHueRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::HueRamp
    }
}

impl MandelbrotHueRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Hue in `[0, 360)` for a non-zero escape count.
    fn hue(&self, iterations: u32) -> f64 {
        let log_max = f64::from(self.max_iterations).log2();

        // log2(1) == 0: with a single-step budget every escape shares hue 0.
        let t = if log_max > 0.0 {
            f64::from(iterations).log2() / log_max
        } else {
            0.0
        };

        (360.0 * t).rem_euclid(360.0)
    }
}
