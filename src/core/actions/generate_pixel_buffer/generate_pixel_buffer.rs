use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates a pixel buffer by mapping input values to colours.
///
/// Streams RGBA bytes into a buffer preallocated for the whole canvas; `input`
/// must hold exactly one value per pixel in row-major order.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    canvas: CanvasSize,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T> + ?Sized,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(canvas.pixel_count() * BYTES_PER_PIXEL);

    for value in input {
        let colour = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;
        buffer.extend_from_slice(&colour.to_rgba());
    }

    Ok(PixelBuffer::from_data(canvas, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, Box<dyn Error>> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
                a: 255 - value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, Box<dyn Error>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(3, 2).unwrap();
        let expected: PixelBufferData = vec![
            1, 1, 1, 254, 2, 2, 2, 253, 3, 3, 3, 252, 4, 4, 4, 251, 5, 5, 5, 250, 6, 6, 6, 249,
        ];

        let results = generate_pixel_buffer(input, &mapper, canvas).unwrap();

        assert_eq!(results.buffer(), &expected);
        assert_eq!(results.canvas(), canvas);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};
        let canvas = CanvasSize::new(3, 2).unwrap();

        let results = generate_pixel_buffer(input, &mapper, canvas);

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_canvas_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &mapper, canvas);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    canvas_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_error_displays_colour_map_error() {
        let err = GeneratePixelBufferError::ColourMap("StubColourMapError".into());

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
