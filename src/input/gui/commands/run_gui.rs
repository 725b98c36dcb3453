use crate::controllers::interactive::InteractiveController;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::{
    app::{frame_title::WINDOW_TITLE, gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};
use log::info;
use std::error::Error;
use std::marker::PhantomData;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    canvas: CanvasSize,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig, canvas: CanvasSize) -> Self {
        Self {
            presenter_factory,
            config,
            canvas,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(self.canvas.width(), self.canvas.height()))
                .build(&event_loop)?,
        ));

        // The window manager may not honour the requested size.
        let size = window.inner_size();
        let canvas = CanvasSize::new(size.width, size.height).unwrap_or(self.canvas);
        info!(
            "opening {}x{} window at ({}, {}), half extent {}, {} iterations, {}",
            canvas.width(),
            canvas.height(),
            self.config.center.real,
            self.config.center.imag,
            self.config.half_extent,
            self.config.max_iterations,
            self.config.colour_map_kind
        );

        let presenter: P = self.presenter_factory.build(window)?;
        let controller = InteractiveController::new(&self.config, canvas)?;
        let app = GuiApp::new(window, presenter, controller);

        app.run(event_loop)
    }
}
