//! Control-mode selection: which modality drives the camera, what it is
//! focused on, and how fast the simulation runs.

mod mode;
mod state;

pub use mode::ControlMode;
pub use state::ControlState;
