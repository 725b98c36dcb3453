pub mod render_canvas;
