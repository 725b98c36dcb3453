//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;

/// Blends one channel of a straight-alpha source over an opaque background.
#[must_use]
pub fn composite_channel(src: u8, alpha: u8, background: u8) -> u8 {
    let alpha = u32::from(alpha);
    let blended = (u32::from(src) * alpha + u32::from(background) * (255 - alpha)) / 255;

    blended as u8
}

/// Composites RGBA pixel data over a solid background into an opaque RGBA frame.
///
/// # Arguments
/// * `src` - Source buffer with RGBA data (4 bytes per pixel)
/// * `background` - Colour shown where the source is transparent
/// * `dst` - Destination buffer for RGBA data, same length as `src`
///
/// # Panics
/// Panics if `src` is not a multiple of 4 or the buffer lengths differ.
pub fn composite_rgba_over(src: &[u8], background: Colour, dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len(),
        "dst length {} does not match src length {}",
        dst.len(),
        src.len()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let alpha = src_pixel[3];
        dst_pixel[0] = composite_channel(src_pixel[0], alpha, background.r);
        dst_pixel[1] = composite_channel(src_pixel[1], alpha, background.g);
        dst_pixel[2] = composite_channel(src_pixel[2], alpha, background.b);
        dst_pixel[3] = 255;
    }
}

/// Composites RGBA pixel data over a solid background and drops the alpha channel.
///
/// # Panics
/// Panics if `src` is not a multiple of 4.
#[must_use]
pub fn composite_rgba_to_rgb(src: &[u8], background: Colour) -> Vec<u8> {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );

    let mut dst = Vec::with_capacity(src.len() / 4 * 3);
    for src_pixel in src.chunks_exact(4) {
        let alpha = src_pixel[3];
        dst.push(composite_channel(src_pixel[0], alpha, background.r));
        dst.push(composite_channel(src_pixel[1], alpha, background.g));
        dst.push(composite_channel(src_pixel[2], alpha, background.b));
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_channel_extremes() {
        assert_eq!(composite_channel(200, 255, 10), 200);
        assert_eq!(composite_channel(200, 0, 10), 10);
        assert_eq!(composite_channel(255, 255, 255), 255);
    }

    #[test]
    fn test_composite_channel_partial_alpha() {
        // (255 * 51 + 0 * 204) / 255
        assert_eq!(composite_channel(255, 51, 0), 51);
        // (0 * 51 + 255 * 204) / 255
        assert_eq!(composite_channel(0, 51, 255), 204);
    }

    #[test]
    fn test_composite_rgba_over_known_values() {
        let src = vec![
            255, 0, 0, 255, // opaque red
            255, 255, 255, 0, // transparent white
            255, 255, 255, 51, // faint white
        ];
        let mut dst = vec![0; src.len()];

        composite_rgba_over(&src, Colour::BLACK, &mut dst);

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 0, 0, 255, 51, 51, 51, 255]
        );
    }

    #[test]
    fn test_composite_rgba_over_uses_background() {
        let src = vec![0, 0, 0, 0];
        let mut dst = vec![0; 4];

        composite_rgba_over(&src, Colour::opaque(10, 20, 30), &mut dst);

        assert_eq!(dst, vec![10, 20, 30, 255]);
    }

    #[test]
    fn test_composite_rgba_over_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        composite_rgba_over(&src, Colour::BLACK, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_composite_rgba_over_rejects_length_mismatch() {
        let src = vec![0; 8];
        let mut dst = vec![0; 4];

        composite_rgba_over(&src, Colour::BLACK, &mut dst);
    }

    #[test]
    fn test_composite_rgba_to_rgb_drops_alpha() {
        let src = vec![128, 64, 32, 255, 255, 255, 255, 0];

        let dst = composite_rgba_to_rgb(&src, Colour::WHITE);

        assert_eq!(dst, vec![128, 64, 32, 255, 255, 255]);
    }
}
