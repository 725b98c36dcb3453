use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        canvas: CanvasSize,
    },
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, canvas } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} canvas",
                    pixel.x,
                    pixel.y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 pixels whose length always matches its canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            buffer: vec![0; canvas_to_buffer_size(canvas)],
        }
    }

    pub fn from_data(
        canvas: CanvasSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = canvas_to_buffer_size(canvas);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());
        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.canvas.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                canvas: self.canvas,
            });
        }

        let row = pixel.y as usize * self.canvas.width() as usize;
        Ok((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
