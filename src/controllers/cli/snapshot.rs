use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_canvas::render_canvas::{RenderCanvasError, render_canvas};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use log::info;
use std::path::Path;

/// Renders one frame without a window and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        viewport: &Viewport,
        colour_map_kind: MandelbrotColourMapKinds,
    ) -> Result<&PixelBuffer, RenderCanvasError> {
        info!(
            "rendering {}x{} snapshot, {} iterations, {}",
            viewport.canvas().width(),
            viewport.canvas().height(),
            viewport.max_iterations(),
            colour_map_kind
        );

        let colour_map = mandelbrot_colour_map_factory(colour_map_kind, viewport.max_iterations());

        Ok(&*self.buffer.insert(render_canvas(viewport, &colour_map)?))
    }

    /// Writes the last generated frame. Does nothing before [`generate`](Self::generate).
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
