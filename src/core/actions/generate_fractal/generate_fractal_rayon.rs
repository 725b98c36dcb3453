use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use rayon::prelude::*;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Pixels are independent, so the output is identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal): collecting
/// into a `Vec` keeps row-major order.
pub fn generate_fractal_rayon<Alg>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = canvas.width();

    (0..canvas.pixel_count())
        .into_par_iter()
        .map(|index| {
            let x = (index % width as usize) as u32;
            let y = (index / width as usize) as u32;
            algorithm.compute(Point { x, y })
        })
        .collect()
}
