use serde::{Deserialize, Serialize};

/// Keyboard-mode actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// reset_focus = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Translate along the view direction.
    MoveForward,
    /// Translate against the view direction.
    MoveBack,
    /// Translate along the camera's left axis.
    StrafeLeft,
    /// Translate along the camera's right axis.
    StrafeRight,
    /// Translate along world up.
    MoveUp,
    /// Translate along world down.
    MoveDown,
    /// Clear the focus target.
    ResetFocus,
}

impl KeyAction {
    /// Whether this action moves the camera (as opposed to changing focus).
    #[must_use]
    pub fn is_movement(self) -> bool {
        !matches!(self, Self::ResetFocus)
    }
}
