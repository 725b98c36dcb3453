pub mod controls;
pub mod step;

pub use controls::{NavigationControlsSnapshot, NavigationKey};
pub use step::{NavigationStepReport, step_navigation};
