use crate::core::data::canvas_size::CanvasSizeError;
use crate::core::data::viewport::ViewportError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionError {
    CanvasSize(CanvasSizeError),
    Viewport(ViewportError),
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasSize(err) => write!(f, "invalid canvas: {}", err),
            Self::Viewport(err) => write!(f, "invalid view: {}", err),
        }
    }
}

impl Error for InteractionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CanvasSize(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<CanvasSizeError> for InteractionError {
    fn from(err: CanvasSizeError) -> Self {
        Self::CanvasSize(err)
    }
}

impl From<ViewportError> for InteractionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
