use crate::core::data::pixel_buffer::PixelBuffer;

/// Display surface the GUI loop uploads finished frames to.
pub trait GuiPresenterPort {
    /// Copies a complete frame into the surface, resizing the backing texture if needed.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), pixels::TextureError>;
    fn render(&mut self) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
