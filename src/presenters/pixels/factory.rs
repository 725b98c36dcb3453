use crate::core::data::colour::Colour;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::window::Window;

pub struct PixelsPresenterFactory {
    background: Colour,
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, self.background)
    }
}

impl PixelsPresenterFactory {
    pub fn new(background: Colour) -> Self {
        Self { background }
    }
}
