pub mod frame_title;
pub mod gui_app;
pub mod key_bindings;
pub mod ports;
