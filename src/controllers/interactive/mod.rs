//! Interactive controller for real-time Mandelbrot exploration.
//!
//! The controller owns the viewport and the canvas buffer. Input adapters
//! feed it [`InteractionEvent`]s and call [`InteractiveController::tick`]
//! once per loop iteration; the canvas is only recomputed while the
//! controller is [`ControllerState::Dirty`].

mod controller;
pub mod errors;
mod events;

pub use controller::{ControllerState, InteractiveController};
pub use errors::interaction::InteractionError;
pub use events::InteractionEvent;
