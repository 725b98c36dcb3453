pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod render_canvas;
