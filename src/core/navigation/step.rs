use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::navigation::controls::NavigationControlsSnapshot;

pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;
pub const PAN_SPEED: f64 = 0.08;
/// Keeps pan speed roughly constant on screen as the view zooms in.
pub const PAN_SOFTENING: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationStepReport {
    /// The viewport differs from the one passed in.
    pub view_changed: bool,
    /// Last mutation refused this tick; the viewport kept its previous value for it.
    pub rejected: Option<ViewportError>,
}

/// Complex-plane distance moved per tick for a held pan key.
#[must_use]
pub fn pan_distance(half_extent: f64) -> f64 {
    PAN_SPEED * half_extent / (half_extent + PAN_SOFTENING)
}

/// Applies one tick of held controls: zoom, then pan at the post-zoom
/// speed, then iteration depth.
pub fn step_navigation(
    viewport: &mut Viewport,
    controls: NavigationControlsSnapshot,
) -> NavigationStepReport {
    let before = *viewport;
    let mut report = NavigationStepReport::default();

    if controls.zoom_in {
        let half_extent = viewport.half_extent() * ZOOM_IN_FACTOR;
        record(&mut report, viewport.set_half_extent(half_extent));
    }
    if controls.zoom_out {
        let half_extent = viewport.half_extent() * ZOOM_OUT_FACTOR;
        record(&mut report, viewport.set_half_extent(half_extent));
    }

    let distance = pan_distance(viewport.half_extent());
    let dx = axis_from_pair(controls.right, controls.left) * distance;
    let dy = axis_from_pair(controls.down, controls.up) * distance;
    if dx != 0.0 || dy != 0.0 {
        let center = viewport.center() + Complex::new(dx, dy);
        record(&mut report, viewport.set_center(center));
    }

    if controls.more_iterations {
        let result = match viewport.max_iterations().checked_add(1) {
            Some(max_iterations) => viewport.set_max_iterations(max_iterations),
            None => Err(ViewportError::IterationsOverflow),
        };
        record(&mut report, result);
    }
    if controls.fewer_iterations && viewport.max_iterations() > 1 {
        let max_iterations = viewport.max_iterations() - 1;
        record(&mut report, viewport.set_max_iterations(max_iterations));
    }

    report.view_changed = *viewport != before;
    report
}

fn record(report: &mut NavigationStepReport, result: Result<(), ViewportError>) {
    if let Err(err) = result {
        report.rejected = Some(err);
    }
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
