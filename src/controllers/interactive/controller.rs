use crate::controllers::interactive::errors::interaction::InteractionError;
use crate::controllers::interactive::events::InteractionEvent;
use crate::core::actions::render_canvas::render_canvas::{RenderCanvasError, render_canvas_into};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::{NavigationControlsSnapshot, NavigationStepReport, step_navigation};
use log::{debug, trace, warn};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// The canvas matches the viewport.
    Idle,
    /// The viewport changed since the last render pass.
    Dirty,
}

/// Owns the viewport and the canvas it is rendered into, and decides when a
/// full render pass is needed.
///
/// The controller starts dirty so the first call to
/// [`render_if_dirty`](Self::render_if_dirty) always produces a frame.
pub struct InteractiveController {
    viewport: Viewport,
    colour_map_kind: MandelbrotColourMapKinds,
    controls: NavigationControlsSnapshot,
    canvas: PixelBuffer,
    dirty: bool,
    exit_requested: bool,
    last_render_duration: Option<Duration>,
}

impl InteractiveController {
    pub fn new(config: &MandelbrotConfig, canvas: CanvasSize) -> Result<Self, InteractionError> {
        let viewport = config.build_viewport(canvas)?;

        Ok(Self {
            viewport,
            colour_map_kind: config.colour_map_kind,
            controls: NavigationControlsSnapshot::default(),
            canvas: PixelBuffer::new(canvas),
            dirty: true,
            exit_requested: false,
            last_render_duration: None,
        })
    }

    /// Applies one discrete input event.
    ///
    /// A rejected resize leaves the viewport, the canvas and the dirty flag
    /// untouched.
    pub fn handle_event(&mut self, event: InteractionEvent) -> Result<(), InteractionError> {
        match event {
            InteractionEvent::CloseRequested | InteractionEvent::ExitRequested => {
                self.exit_requested = true;
            }
            InteractionEvent::Resized { width, height } => self.resize(width, height)?,
            InteractionEvent::FocusLost => self.controls = NavigationControlsSnapshot::default(),
            InteractionEvent::KeyPressed(key) => self.controls = self.controls.with_key(key, true),
            InteractionEvent::KeyReleased(key) => {
                self.controls = self.controls.with_key(key, false);
            }
        }

        Ok(())
    }

    /// Applies the held keys once.
    pub fn tick(&mut self) -> NavigationStepReport {
        let report = step_navigation(&mut self.viewport, self.controls);

        if let Some(err) = report.rejected {
            warn!("navigation step rejected: {}", err);
        }
        if report.view_changed {
            trace!(
                "view moved to ({}, {}), half extent {}, {} iterations",
                self.viewport.center().real,
                self.viewport.center().imag,
                self.viewport.half_extent(),
                self.viewport.max_iterations()
            );
            self.dirty = true;
        }

        report
    }

    /// Runs a full render pass when dirty and returns the new frame.
    ///
    /// Returns `Ok(None)` when the canvas is already consistent with the
    /// viewport. On failure the previous frame is kept and the controller
    /// stays dirty.
    pub fn render_if_dirty(&mut self) -> Result<Option<&PixelBuffer>, RenderCanvasError> {
        if !self.dirty {
            return Ok(None);
        }

        let colour_map =
            mandelbrot_colour_map_factory(self.colour_map_kind, self.viewport.max_iterations());
        let start = Instant::now();

        render_canvas_into(&self.viewport, &colour_map, &mut self.canvas)?;

        self.last_render_duration = Some(start.elapsed());
        self.dirty = false;

        Ok(Some(&self.canvas))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), InteractionError> {
        let canvas = CanvasSize::new(width, height).inspect_err(|err| {
            warn!("resize rejected: {}", err);
        })?;

        if canvas == self.viewport.canvas() {
            return Ok(());
        }

        self.viewport.set_canvas(canvas).inspect_err(|err| {
            warn!("resize rejected: {}", err);
        })?;
        debug!("canvas resized to {}x{}", width, height);
        self.canvas = PixelBuffer::new(canvas);
        self.dirty = true;

        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        if self.dirty {
            ControllerState::Dirty
        } else {
            ControllerState::Idle
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn controls(&self) -> NavigationControlsSnapshot {
        self.controls
    }

    #[must_use]
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}
