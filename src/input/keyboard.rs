use serde::{Deserialize, Serialize};

use super::snapshot::Movement;

/// Application actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction.
    MoveForward,
    /// Move against the view direction.
    MoveBackward,
    /// Move along the side-shift axis.
    StrafeLeft,
    /// Move against the side-shift axis.
    StrafeRight,
    /// Move along world up.
    Ascend,
    /// Move against world up.
    Descend,
    /// Toggle mouse look on or off.
    ToggleMouseLook,
    /// Leave the frame loop.
    Quit,
}

impl KeyAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::Ascend,
        Self::Descend,
        Self::ToggleMouseLook,
        Self::Quit,
    ];

    /// Continuous movement driven by this action, if any.
    #[must_use]
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::StrafeLeft => Some(Movement::StrafeLeft),
            Self::StrafeRight => Some(Movement::StrafeRight),
            Self::Ascend => Some(Movement::Ascend),
            Self::Descend => Some(Movement::Descend),
            Self::ToggleMouseLook | Self::Quit => None,
        }
    }
}
