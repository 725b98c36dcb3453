use clap::{Args, Parser, ValueEnum};
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_HALF_EXTENT, DEFAULT_MAX_ITERATIONS, MandelbrotConfig,
};
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 360;
pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourMapArg {
    HueRamp,
    AlphaRamp,
}

impl From<ColourMapArg> for MandelbrotColourMapKinds {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::HueRamp => Self::HueRamp,
            ColourMapArg::AlphaRamp => Self::AlphaRamp,
        }
    }
}

/// Startup view shared by the windowed and headless binaries.
#[derive(Debug, Clone, Args)]
pub struct ViewerArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,
    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
    /// Real part of the view center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_real: f64,
    /// Imaginary part of the view center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_imag: f64,
    /// Half the visible height of the complex plane
    #[arg(long, default_value_t = DEFAULT_HALF_EXTENT, allow_negative_numbers = true)]
    pub half_extent: f64,
    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
    /// Colour policy, fixed for the whole run
    #[arg(long, value_enum, default_value_t = ColourMapArg::HueRamp)]
    pub colour_map: ColourMapArg,
}

impl ViewerArgs {
    /// The view settings; validated later by [`MandelbrotConfig::build_viewport`].
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            center: Complex::new(self.center_real, self.center_imag),
            half_extent: self.half_extent,
            max_iterations: self.max_iterations,
            colour_map_kind: self.colour_map.into(),
            ..MandelbrotConfig::default()
        }
    }

    pub fn canvas_size(&self) -> Result<CanvasSize, CanvasSizeError> {
        CanvasSize::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Interactive Mandelbrot viewer")]
pub struct GuiArgs {
    #[command(flatten)]
    pub view: ViewerArgs,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_snapshot")]
#[command(about = "Render one Mandelbrot frame to a PPM file")]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub view: ViewerArgs,
    /// Output path for the rendered image
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
