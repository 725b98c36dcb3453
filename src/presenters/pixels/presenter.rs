use crate::adapters::pixel_format::composite_rgba_over;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

/// Uploads finished frames to a `pixels` surface, composited over a solid background.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    background: Colour,
    buffer_width: u32,
    buffer_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, background: Colour) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            background,
            buffer_width: size.width,
            buffer_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), TextureError> {
        let canvas = frame.canvas();

        if canvas.width() != self.buffer_width || canvas.height() != self.buffer_height {
            self.pixels.resize_buffer(canvas.width(), canvas.height())?;
            self.buffer_width = canvas.width();
            self.buffer_height = canvas.height();
        }

        composite_rgba_over(frame.buffer(), self.background, self.pixels.frame_mut());

        Ok(())
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.pixels.resize_surface(width, height)
    }
}
