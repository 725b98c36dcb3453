use crate::controllers::interactive::{InteractionEvent, InteractiveController};
use crate::input::gui::app::frame_title::frame_title;
use crate::input::gui::app::key_bindings::interaction_event;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use log::{debug, error};
use std::error::Error;
use std::time::{Duration, Instant};
use winit::{
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::Window,
};

/// Held keys are re-evaluated at roughly 60 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_micros(16_667);

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    next_tick: Option<Instant>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, presenter: T, controller: InteractiveController) -> Self {
        Self {
            window,
            presenter,
            controller,
            next_tick: None,
        }
    }

    /// Runs the event loop until the window is closed or Escape is pressed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), Box<dyn Error>> {
        let mut failure: Option<Box<dyn Error>> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                if let Err(err) = self.handle_window_event(event) {
                    error!("{}", err);
                    failure = Some(err);
                    elwt.exit();
                }
            }
            Event::AboutToWait => self.about_to_wait(elwt),
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent) -> Result<(), Box<dyn Error>> {
        match event {
            WindowEvent::CloseRequested => self.dispatch(InteractionEvent::CloseRequested),
            WindowEvent::Focused(false) => self.dispatch(InteractionEvent::FocusLost),
            WindowEvent::Resized(size) => {
                // Minimised windows report 0x0; keep the last surface until restored.
                if size.width > 0 && size.height > 0 {
                    self.presenter.resize(size.width, size.height)?;
                    self.dispatch(InteractionEvent::Resized {
                        width: size.width,
                        height: size.height,
                    });
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if let Some(event) = interaction_event(key_code, state, repeat) {
                    self.dispatch(event);
                }
            }
            WindowEvent::RedrawRequested => self.redraw()?,
            _ => {}
        }

        Ok(())
    }

    fn dispatch(&mut self, event: InteractionEvent) {
        // Rejections are logged by the controller and leave the view untouched.
        if self.controller.handle_event(event).is_err() {
            debug!("ignored {:?}", event);
        }
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.controller.exit_requested() {
            elwt.exit();
            return;
        }

        if self.controller.controls().is_idle() {
            self.next_tick = None;
            elwt.set_control_flow(ControlFlow::Wait);
        } else {
            let now = Instant::now();
            let next_tick = match self.next_tick {
                Some(next_tick) if now < next_tick => next_tick,
                _ => {
                    self.controller.tick();
                    now + TICK_INTERVAL
                }
            };
            self.next_tick = Some(next_tick);
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }

        if self.controller.is_dirty() {
            self.window.request_redraw();
        }
    }

    fn redraw(&mut self) -> Result<(), Box<dyn Error>> {
        let start = Instant::now();

        if let Some(frame) = self.controller.render_if_dirty()? {
            self.presenter.present(frame)?;
            self.presenter.render()?;
            self.window.set_title(&frame_title(start.elapsed()));
        } else {
            self.presenter.render()?;
        }

        Ok(())
    }
}
