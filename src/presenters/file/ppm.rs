use crate::adapters::pixel_format::composite_rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM, composited over a solid background.
pub struct PpmFilePresenter {
    background: Colour,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        if let Some(parent) = filepath.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        self.write_ppm(buffer, &mut file)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new(Colour::BLACK)
    }
}

impl PpmFilePresenter {
    pub fn new(background: Colour) -> Self {
        Self { background }
    }

    pub fn write_ppm<W: Write>(&self, buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
        let width = buffer.canvas().width();
        let height = buffer.canvas().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", width, height)?;
        writeln!(writer, "255")?;
        writer.write_all(&composite_rgba_to_rgb(buffer.buffer(), self.background))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::data::point::Point;

    fn two_by_one_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(CanvasSize::new(2, 1).unwrap());
        buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour::opaque(255, 0, 0))
            .unwrap();
        buffer
            .set_pixel(
                Point { x: 1, y: 0 },
                Colour {
                    r: 255,
                    g: 255,
                    b: 255,
                    a: 0,
                },
            )
            .unwrap();
        buffer
    }

    #[test]
    fn test_writes_header_and_rgb_payload() {
        let presenter = PpmFilePresenter::new(Colour::opaque(0, 0, 255));
        let mut out = Vec::new();

        presenter.write_ppm(&two_by_one_buffer(), &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("ppm_presenter_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");

        PpmFilePresenter::default()
            .present(&two_by_one_buffer(), &path)
            .unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), b"P6\n2 1\n255\n".len() + 6);

        fs::remove_dir_all(dir).unwrap();
    }
}
