use crate::controllers::interactive::InteractionEvent;
use crate::core::navigation::NavigationKey;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

#[must_use]
pub fn navigation_key(key_code: KeyCode) -> Option<NavigationKey> {
    match key_code {
        KeyCode::KeyW => Some(NavigationKey::Up),
        KeyCode::KeyS => Some(NavigationKey::Down),
        KeyCode::KeyA => Some(NavigationKey::Left),
        KeyCode::KeyD => Some(NavigationKey::Right),
        KeyCode::KeyE => Some(NavigationKey::ZoomIn),
        KeyCode::KeyQ => Some(NavigationKey::ZoomOut),
        KeyCode::KeyR => Some(NavigationKey::MoreIterations),
        KeyCode::KeyF => Some(NavigationKey::FewerIterations),
        _ => None,
    }
}

/// Translates a physical key transition into a controller event.
///
/// OS key repeats are dropped so held state only changes on real
/// press and release transitions.
#[must_use]
pub fn interaction_event(
    key_code: KeyCode,
    state: ElementState,
    repeat: bool,
) -> Option<InteractionEvent> {
    if repeat {
        return None;
    }

    if key_code == KeyCode::Escape {
        return match state {
            ElementState::Pressed => Some(InteractionEvent::ExitRequested),
            ElementState::Released => None,
        };
    }

    let key = navigation_key(key_code)?;
    match state {
        ElementState::Pressed => Some(InteractionEvent::KeyPressed(key)),
        ElementState::Released => Some(InteractionEvent::KeyReleased(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_map_to_held_transitions() {
        assert_eq!(
            interaction_event(KeyCode::KeyE, ElementState::Pressed, false),
            Some(InteractionEvent::KeyPressed(NavigationKey::ZoomIn))
        );
        assert_eq!(
            interaction_event(KeyCode::KeyE, ElementState::Released, false),
            Some(InteractionEvent::KeyReleased(NavigationKey::ZoomIn))
        );
    }

    #[test]
    fn every_binding_is_distinct() {
        let codes = [
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyE,
            KeyCode::KeyQ,
            KeyCode::KeyR,
            KeyCode::KeyF,
        ];

        let keys: std::collections::HashSet<NavigationKey> =
            codes.iter().filter_map(|&code| navigation_key(code)).collect();

        assert_eq!(keys.len(), codes.len());
    }

    #[test]
    fn repeats_are_ignored() {
        assert_eq!(
            interaction_event(KeyCode::KeyW, ElementState::Pressed, true),
            None
        );
    }

    #[test]
    fn escape_press_requests_exit() {
        assert_eq!(
            interaction_event(KeyCode::Escape, ElementState::Pressed, false),
            Some(InteractionEvent::ExitRequested)
        );
        assert_eq!(
            interaction_event(KeyCode::Escape, ElementState::Released, false),
            None
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(
            interaction_event(KeyCode::KeyP, ElementState::Pressed, false),
            None
        );
        assert_eq!(
            interaction_event(KeyCode::Space, ElementState::Released, false),
            None
        );
    }
}
