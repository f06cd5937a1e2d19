use std::fmt;

use serde::{Deserialize, Serialize};

/// The single active input modality driving the camera.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Drag-to-orbit, scroll-to-zoom.
    #[default]
    Pointer,
    /// Per-keystroke translation.
    Keyboard,
    /// Scripted slow circling of the system.
    Autopilot,
    /// Hand gestures from the camera feed.
    Hand,
}

impl ControlMode {
    /// Every mode, in UI order.
    pub const ALL: [Self; 4] =
        [Self::Pointer, Self::Keyboard, Self::Autopilot, Self::Hand];

    /// Whether the pose-distance band applies in this mode.
    #[must_use]
    pub fn is_distance_clamped(self) -> bool {
        matches!(self, Self::Pointer | Self::Hand)
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pointer => "pointer",
            Self::Keyboard => "keyboard",
            Self::Autopilot => "autopilot",
            Self::Hand => "hand",
        };
        f.write_str(label)
    }
}
