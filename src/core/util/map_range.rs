/// Linearly maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The input interval must not be degenerate (`in_min != in_max`); callers
/// mapping pixel axes get this for free from `CanvasSize`.
#[must_use]
#[inline]
pub fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_identity_when_intervals_coincide() {
        for x in [-3.5, -1.0, 0.0, 0.25, 7.0, 1e6] {
            assert!((map_range(x, -2.0, 9.0, -2.0, 9.0) - x).abs() <= EPSILON * x.abs().max(1.0));
        }
    }

    #[test]
    fn test_unit_interval_is_affine() {
        for x in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let expected = -4.0 + x * (6.0 - -4.0);
            assert!((map_range(x, 0.0, 1.0, -4.0, 6.0) - expected).abs() <= EPSILON);
        }
    }

    #[test]
    fn test_maps_pixel_axis_onto_plane() {
        assert_eq!(map_range(0.0, 0.0, 4.0, -2.0, 2.0), -2.0);
        assert_eq!(map_range(2.0, 0.0, 4.0, -2.0, 2.0), 0.0);
        assert_eq!(map_range(4.0, 0.0, 4.0, -2.0, 2.0), 2.0);
    }

    #[test]
    fn test_reversed_output_interval() {
        assert_eq!(map_range(1.0, 0.0, 4.0, 2.0, -2.0), 1.0);
    }
}
