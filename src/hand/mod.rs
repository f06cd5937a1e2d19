//! Hand tracking: landmark acquisition lifecycle, per-sample
//! classification, and the gesture channel to the render loop.

pub mod channel;
mod lifecycle;
mod source;
mod tracker;

pub use channel::{GestureReceiver, StampedGesture};
pub use lifecycle::HandControllerLifecycle;
pub use source::LandmarkSource;
pub use tracker::HandTracker;

#[cfg(test)]
pub(crate) use tracker::fake;
