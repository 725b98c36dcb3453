use crate::core::navigation::NavigationKey;

/// Discrete input delivered to the controller once per loop iteration.
///
/// Keys that are neither navigation keys nor the exit key never become events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    CloseRequested,
    ExitRequested,
    Resized { width: u32, height: u32 },
    FocusLost,
    KeyPressed(NavigationKey),
    KeyReleased(NavigationKey),
}
