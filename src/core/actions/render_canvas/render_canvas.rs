use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use log::debug;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug)]
pub enum RenderCanvasError {
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderCanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal generation failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderCanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderCanvasError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError> for RenderCanvasError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Recomputes every pixel of the viewport's canvas from scratch.
///
/// Escape times are evaluated in parallel, then coloured in one pass.
pub fn render_canvas<CMap>(
    viewport: &Viewport,
    colour_map: &CMap,
) -> Result<PixelBuffer, RenderCanvasError>
where
    CMap: ColourMap<u32> + ?Sized,
{
    let canvas = viewport.canvas();
    let start = Instant::now();

    let algorithm = MandelbrotAlgorithm::new(*viewport);
    let escape_times = generate_fractal_rayon(canvas, &algorithm)?;
    let pixel_buffer = generate_pixel_buffer(escape_times, colour_map, canvas)?;

    debug!(
        "rendered {}x{} canvas at center ({}, {}), half extent {}, {} iterations, {} in {:?}",
        canvas.width(),
        canvas.height(),
        viewport.center().real,
        viewport.center().imag,
        viewport.half_extent(),
        viewport.max_iterations(),
        colour_map.display_name(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}

/// Renders into `target`, replacing it wholesale once the new frame is complete.
///
/// `target` is reallocated if its dimensions no longer match the viewport, and
/// is left untouched if rendering fails.
pub fn render_canvas_into<CMap>(
    viewport: &Viewport,
    colour_map: &CMap,
    target: &mut PixelBuffer,
) -> Result<(), RenderCanvasError>
where
    CMap: ColourMap<u32> + ?Sized,
{
    *target = render_canvas(viewport, colour_map)?;
    Ok(())
}
