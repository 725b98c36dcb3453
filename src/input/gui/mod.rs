//! GUI input adapter for interactive Mandelbrot exploration.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer upload. Keyboard input drives the
//! [`InteractiveController`](crate::controllers::interactive::InteractiveController).

pub mod app;
pub mod commands;

pub use commands::run_gui::RunGuiCommand;
