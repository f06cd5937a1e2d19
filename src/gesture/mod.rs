//! Hand-gesture classification.
//!
//! Converts per-sample hand landmark sets into discrete
//! [`GestureEvent`]s. Classification is synchronous and deterministic given
//! the retained [`ClassifierState`] and the input sample.

pub mod classifier;
/// The classified gesture signal.
pub mod event;
pub mod landmarks;
/// Static single-hand poses read from finger extension.
pub mod pose;

pub use classifier::{classify, ClassifierState, GestureClassifier};
pub use event::GestureEvent;
pub use landmarks::{Finger, HandLandmarks, LANDMARK_COUNT};
pub use pose::HandPose;
