//! Camera system: pose, the per-frame controller state machine, the
//! pointer orbit helper and the timed return-to-overview flight.

/// Per-frame camera state machine keyed by control mode.
pub mod controller;
/// Pointer drag-to-orbit helper with damping.
pub mod orbit_control;
/// Camera pose and spherical coordinates.
pub mod pose;
/// Eased flight between two poses.
pub mod transition;

pub use controller::{CameraController, FrameInput};
pub use orbit_control::OrbitControl;
pub use pose::{CameraPose, Spherical};
pub use transition::ResetTransition;
