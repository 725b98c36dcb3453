use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;

/// Evaluates `algorithm` for every pixel of `canvas` in row-major order.
///
/// Sequential reference for
/// [`generate_fractal_rayon`](super::generate_fractal_rayon::generate_fractal_rayon).
#[allow(dead_code)]
pub fn generate_fractal<Alg: FractalAlgorithm>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    canvas.points().map(|pixel| algorithm.compute(pixel)).collect()
}
