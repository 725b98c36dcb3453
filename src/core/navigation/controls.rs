/// Keyboard actions that move the view while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    Up,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
    MoreIterations,
    FewerIterations,
}

/// Immutable snapshot of which navigation keys are currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationControlsSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub more_iterations: bool,
    pub fewer_iterations: bool,
}

impl NavigationControlsSnapshot {
    #[must_use]
    pub fn with_key(self, key: NavigationKey, held: bool) -> Self {
        let mut next = self;
        match key {
            NavigationKey::Up => next.up = held,
            NavigationKey::Down => next.down = held,
            NavigationKey::Left => next.left = held,
            NavigationKey::Right => next.right = held,
            NavigationKey::ZoomIn => next.zoom_in = held,
            NavigationKey::ZoomOut => next.zoom_out = held,
            NavigationKey::MoreIterations => next.more_iterations = held,
            NavigationKey::FewerIterations => next.fewer_iterations = held,
        }
        next
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
