use crate::core::{
    data::{
        canvas_size::CanvasSize,
        colour::Colour,
        complex::Complex,
        viewport::{Viewport, ViewportError},
    },
    fractals::mandelbrot::colour_mapping::{
        factory::mandelbrot_colour_map_factory, kinds::MandelbrotColourMapKinds,
        map::MandelbrotColourMap,
    },
};

pub const DEFAULT_CENTER: Complex = Complex::ORIGIN;
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;
pub const DEFAULT_BACKGROUND: Colour = Colour::BLACK;

/// Startup view and colour settings; validated when turned into a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub center: Complex,
    pub half_extent: f64,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    /// Solid colour the alpha ramp is composited over.
    pub background: Colour,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            half_extent: DEFAULT_HALF_EXTENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_viewport(&self, canvas: CanvasSize) -> Result<Viewport, ViewportError> {
        Viewport::new(self.center, self.half_extent, self.max_iterations, canvas)
    }

    #[must_use]
    pub fn build_colour_map(&self, max_iterations: u32) -> Box<dyn MandelbrotColourMap> {
        mandelbrot_colour_map_factory(self.colour_map_kind, max_iterations)
    }
}
