//! Shared utilities: easing curves and frame pacing.

pub mod easing;
/// Wall-clock frame pacing for render loops.
pub mod frame_timing;
