pub mod alpha_ramp;
pub mod hue_ramp;
