use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

/// White with alpha `255 * iterations / max_iterations` (integer division, so
/// the ramp is banded). The display layer composites it over the
/// background; non-escaping points come out fully transparent.
#[derive(Debug)]
pub struct MandelbrotAlphaRamp {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotAlphaRamp {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotColourMapErrors::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        // u64 keeps 255 * iterations from overflowing for large budgets.
        let alpha = (255 * u64::from(iterations))
            .checked_div(u64::from(self.max_iterations))
            .unwrap_or(0);

        Ok(Colour {
            a: alpha as u8,
            ..Colour::WHITE
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotAlphaRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::AlphaRamp
    }
}

impl MandelbrotAlphaRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
