use crate::core::data::colour::Colour;

/// Converts hue (degrees, `[0, 360)`), saturation and lightness (`[0, 1]`) to an
/// opaque 8-bit colour using the chroma / hue-prime sextant construction.
///
/// Callers must reduce the hue into `[0, 360)` first; a hue outside it falls
/// in no sextant and yields the achromatic lightness offset.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    debug_assert!((0.0..360.0).contains(&hue), "hue out of range: {}", hue);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - ((hue_prime % 2.0) - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match hue_prime.floor() as i32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        5 => (chroma, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    Colour::opaque(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_secondary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour::opaque(255, 0, 0));
        assert_eq!(hsl_to_rgb(60.0, 1.0, 0.5), Colour::opaque(255, 255, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Colour::opaque(0, 255, 0));
        assert_eq!(hsl_to_rgb(180.0, 1.0, 0.5), Colour::opaque(0, 255, 255));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Colour::opaque(0, 0, 255));
        assert_eq!(hsl_to_rgb(300.0, 1.0, 0.5), Colour::opaque(255, 0, 255));
    }

    #[test]
    fn test_lightness_extremes_are_achromatic() {
        assert_eq!(hsl_to_rgb(200.0, 0.7, 0.0), Colour::BLACK);
        assert_eq!(hsl_to_rgb(200.0, 0.7, 1.0), Colour::WHITE);
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        // 0.6 * 255 = 153
        assert_eq!(hsl_to_rgb(42.0, 0.0, 0.6), Colour::opaque(153, 153, 153));
    }

    #[test]
    fn test_viewer_palette_red() {
        // C = 0.56, M = 0.32: (0.88, 0.32, 0.32) * 255 rounds to (224, 82, 82)
        assert_eq!(hsl_to_rgb(0.0, 0.7, 0.6), Colour::opaque(224, 82, 82));
    }

    #[test]
    fn test_hue_just_below_full_turn_is_red_sextant() {
        let colour = hsl_to_rgb(359.999, 1.0, 0.5);

        assert_eq!((colour.r, colour.g), (255, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hue out of range")]
    fn test_full_turn_hue_is_refused() {
        let _ = hsl_to_rgb(360.0, 0.7, 0.6);
    }
}
