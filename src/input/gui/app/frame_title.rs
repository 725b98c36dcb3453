use std::time::Duration;

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

/// Window title carrying the last frame time, e.g. `Mandelbrot Explorer | 12.3 ms (81 fps)`.
#[must_use]
pub fn frame_title(frame_time: Duration) -> String {
    let seconds = frame_time.as_secs_f64();

    if seconds <= 0.0 {
        return format!("{} | {:.1} ms", WINDOW_TITLE, 0.0);
    }

    format!(
        "{} | {:.1} ms ({:.0} fps)",
        WINDOW_TITLE,
        seconds * 1000.0,
        1.0 / seconds
    )
}
