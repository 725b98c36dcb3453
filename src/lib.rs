mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{composite_rgba_over, composite_rgba_to_rgb};
pub use crate::controllers::cli::snapshot::SnapshotController;
pub use crate::controllers::interactive::{
    ControllerState, InteractionError, InteractionEvent, InteractiveController,
};
pub use crate::core::actions::render_canvas::render_canvas::{
    RenderCanvasError, render_canvas, render_canvas_into,
};
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::navigation::{NavigationControlsSnapshot, NavigationKey};
pub use crate::input::cli::args::{GuiArgs, SnapshotArgs, ViewerArgs};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
