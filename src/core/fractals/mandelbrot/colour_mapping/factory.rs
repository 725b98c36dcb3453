use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{alpha_ramp::MandelbrotAlphaRamp, hue_ramp::MandelbrotHueRamp},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::HueRamp => Box::new(MandelbrotHueRamp::new(max_iterations)),
        MandelbrotColourMapKinds::AlphaRamp => Box::new(MandelbrotAlphaRamp::new(max_iterations)),
    }
}
