use log::debug;

use super::SceneState;

/// Pointer button, numbered the way browsers number them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

impl PointerButton {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => PointerButton::Left,
            1 => PointerButton::Middle,
            2 => PointerButton::Right,
            other => PointerButton::Other(other),
        }
    }
}

/// A click as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    pub button: PointerButton,
    pub shift: bool,
}

impl PointerClick {
    pub fn left() -> Self {
        Self {
            button: PointerButton::Left,
            shift: false,
        }
    }

    pub fn shift_left() -> Self {
        Self {
            button: PointerButton::Left,
            shift: true,
        }
    }
}

/// Left click reverses time, shift + left click toggles fast time.
///
/// Returns whether the click changed anything.
pub fn apply_click(state: &mut SceneState, click: PointerClick) -> bool {
    if click.button != PointerButton::Left {
        return false;
    }

    if click.shift {
        state.speed = state.speed.toggled();
        debug!("time speed now x{}", state.speed.factor());
    } else {
        state.direction = state.direction.toggled();
        debug!("time direction now {:?}", state.direction);
    }
    true
}
