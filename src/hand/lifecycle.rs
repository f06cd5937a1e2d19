use std::fmt;

/// Acquisition state of the landmark model and camera stream.
///
/// Independent of [`ControlMode`](crate::control::ControlMode): the tracker
/// may be ready while another mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandControllerLifecycle {
    /// Nothing requested yet.
    #[default]
    Uninitialized,
    /// Acquisition in progress.
    Loading,
    /// Model and stream available.
    Ready,
    /// Acquisition failed; see the tracker's status string.
    Error,
}

impl HandControllerLifecycle {
    /// Whether video samples can be processed.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

impl fmt::Display for HandControllerLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}
